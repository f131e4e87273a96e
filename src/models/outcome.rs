use serde::Serialize;

use super::UserStory;

/// Terminal result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No message was supplied.
    Rejected,
    /// The run stopped early without touching the backlog.
    Skipped { reason: SkipReason },
    /// A user story was filed.
    Created {
        task: UserStory,
        subtasks: Vec<String>,
    },
    /// A tracker call failed.
    Failed { reason: String },
}

/// Why a run ended without creating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoActionableTask,
    AlreadyExists,
    NothingGenerated,
}

impl SkipReason {
    /// Human-readable explanation returned to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoActionableTask => "No actionable task found.",
            Self::AlreadyExists => "Task already exists in Taiga.",
            Self::NothingGenerated => "No description or subtasks generated for the task.",
        }
    }
}
