use serde::{Deserialize, Serialize};

/// Body of an inbound chat message webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_field_deserializes_to_none() {
        let payload: MessagePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.message.is_none());
    }
}
