use std::sync::Arc;
use std::time::Duration;

use super::LanguageModel;
use crate::models::EnrichedTask;

const SYSTEM_PROMPT: &str = "You are a project management assistant. Given a task title, generate:\n\
- A clear and detailed task description\n\
- 3-5 meaningful subtasks\n\n\
Respond in this format:\n\
Description: <description>\n\
Subtasks:\n- <subtask1>\n- <subtask2>\n...";

const DESCRIPTION_LABEL: &str = "Description:";
const SUBTASKS_MARKER: &str = "Subtasks:";

/// Expands an approved title into a description and subtasks.
#[derive(Clone)]
pub struct Enricher {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
}

impl Enricher {
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Ask the model for a description and subtasks.
    ///
    /// A failed call or an empty reply yields an empty [`EnrichedTask`].
    pub async fn enhance(&self, title: &str) -> EnrichedTask {
        let prompt = build_prompt(title);

        let output = match self.llm.generate(&prompt, self.timeout).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Enrichment failed for {:?}: {}", title, e);
                return EnrichedTask::empty(title);
            }
        };
        if output.trim().is_empty() {
            return EnrichedTask::empty(title);
        }

        let (description, subtasks) = parse_enrichment(&output);
        EnrichedTask {
            title: title.to_string(),
            description,
            subtasks,
        }
    }
}

fn build_prompt(title: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nTask Title:\n\"{title}\"")
}

/// Split free-form model output into a description and an ordered subtask list.
///
/// Everything before the first `Subtasks:` marker is the description (with an
/// optional leading `Description:` label removed). Every non-blank line after
/// it is a subtask, with bullet characters stripped. Without the marker the
/// whole text is the description.
pub fn parse_enrichment(output: &str) -> (String, Vec<String>) {
    let Some((head, tail)) = output.split_once(SUBTASKS_MARKER) else {
        return (output.trim().to_string(), Vec::new());
    };

    let head = head.trim();
    let description = head
        .strip_prefix(DESCRIPTION_LABEL)
        .unwrap_or(head)
        .trim()
        .to_string();

    let subtasks = tail
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    (description, subtasks)
}

fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '*' | '•') || c.is_whitespace())
}
