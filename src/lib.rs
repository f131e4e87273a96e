//! Chat-message to Taiga backlog bridge.
//!
//! A message flows through [`pipeline::Pipeline`]: the [`llm::TitleExtractor`]
//! decides whether it describes a task, [`tracker::DedupGuard`] checks the
//! backlog, [`llm::Enricher`] expands the title, and [`tracker::TaskCreator`]
//! files the user story.

pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod tracker;
