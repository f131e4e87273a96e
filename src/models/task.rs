use serde::{Deserialize, Serialize};

/// A task title expanded by the language model.
///
/// `description` and `subtasks` come out of a single parse; both empty means
/// the model produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTask {
    pub title: String,
    pub description: String,
    pub subtasks: Vec<String>,
}

impl EnrichedTask {
    /// An enrichment that produced nothing.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subtasks: Vec::new(),
        }
    }

    /// True when both a description and at least one subtask were generated.
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty() && !self.subtasks.is_empty()
    }
}
