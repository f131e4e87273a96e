use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Priority Taiga assigns when the caller does not pick one.
pub const DEFAULT_PRIORITY: i64 = 3;

/// A backlog user story exactly as Taiga returned it.
///
/// The record is owned by the tracker and handed back to the caller
/// untouched, so it stays raw JSON. Accessors read the few fields taskbridge
/// logs; a record missing them is still a valid story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserStory(pub Value);

impl UserStory {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("subject").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }
}

/// Entry in a backlog listing. Taiga sends full stories; dedup only needs the subject.
#[derive(Debug, Clone, Deserialize)]
pub struct StorySummary {
    pub subject: String,
}

/// Input for creating a user story.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserStoryInput {
    pub project: i64,
    pub subject: String,
    pub description: String,
    pub priority: i64,
}
