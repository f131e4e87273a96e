//! Domain models for taskbridge.
//!
//! # Core Concepts
//!
//! ## Transient values
//!
//! These live only for one pipeline run and are never persisted locally:
//!
//! - [`MessagePayload`]: the inbound chat message.
//! - [`EnrichedTask`]: a candidate title expanded into a description and subtasks.
//! - [`Outcome`]: the terminal result of a run.
//!
//! ## Tracker records
//!
//! - [`UserStory`]: a backlog item as Taiga returns it. Owned by the tracker and
//!   passed back to the caller untouched.

mod message;
mod outcome;
mod story;
mod task;

pub use message::*;
pub use outcome::*;
pub use story::*;
pub use task::*;
