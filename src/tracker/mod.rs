//! Taiga side of the pipeline.
//!
//! Every failure here is a hard error: a dedup check or a create that
//! silently fails risks duplicated or lost backlog items.

mod creator;
mod dedup;
mod session;

use reqwest::StatusCode;
use thiserror::Error;

pub use creator::TaskCreator;
pub use dedup::DedupGuard;
pub use session::TrackerSession;

/// Tracker client errors.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Project lookup failed: {0}")]
    Lookup(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tracker returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}
