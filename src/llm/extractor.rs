use std::sync::Arc;
use std::time::Duration;

use super::LanguageModel;

/// Reply the model gives when a message holds no task.
const NO_TASK: &str = "none";

/// Asks the model whether a chat message describes a task.
#[derive(Clone)]
pub struct TitleExtractor {
    llm: Arc<dyn LanguageModel>,
}

impl TitleExtractor {
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    /// Return a concise task title, or `None` when the message holds no task
    /// or the model could not be reached.
    pub async fn extract_title(&self, message: &str, timeout: Duration) -> Option<String> {
        let prompt = build_prompt(message);

        match self.llm.generate(&prompt, timeout).await {
            Ok(reply) => {
                let title = reply.trim();
                tracing::info!("Extracted task title: {}", title);
                if title.is_empty() || title.eq_ignore_ascii_case(NO_TASK) {
                    None
                } else {
                    Some(title.to_string())
                }
            }
            Err(e) => {
                tracing::error!("Title extraction failed: {}", e);
                None
            }
        }
    }
}

fn build_prompt(message: &str) -> String {
    format!(
        "You are a project assistant. Given the following Microsoft Teams message, \
         extract a concise task title.\n\
         If the message does not describe a task, respond with \"None\".\n\n\
         Message:\n\"{message}\"\n\n\
         Only return the task title or \"None\"."
    )
}
