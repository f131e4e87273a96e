//! Message-to-story orchestration.
//!
//! A run moves through extraction, the duplicate check, enrichment and
//! creation, stopping at the first step that has nothing to hand on. Partial
//! progress is dropped; nothing is retried or rolled back.

use std::sync::Arc;
use std::time::Duration;

use crate::llm::{Enricher, LanguageModel, TitleExtractor};
use crate::models::{Outcome, SkipReason};
use crate::tracker::{DedupGuard, TaskCreator, TrackerError, TrackerSession};

/// One orchestration run. Build a fresh pipeline per message so the tracker
/// session's cached token and project id never outlive the request.
pub struct Pipeline {
    extractor: TitleExtractor,
    enricher: Enricher,
    session: TrackerSession,
    llm_timeout: Duration,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn LanguageModel>, llm_timeout: Duration, session: TrackerSession) -> Self {
        Self {
            extractor: TitleExtractor::new(llm.clone()),
            enricher: Enricher::new(llm, llm_timeout),
            session,
            llm_timeout,
        }
    }

    /// Process a message and report how the run ended.
    pub async fn run(&self, message: Option<&str>) -> Outcome {
        match self.try_run(message).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Pipeline failed: {}", e);
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_run(&self, message: Option<&str>) -> Result<Outcome, TrackerError> {
        let Some(message) = message.filter(|m| !m.trim().is_empty()) else {
            return Ok(Outcome::Rejected);
        };

        let Some(title) = self.extractor.extract_title(message, self.llm_timeout).await else {
            return Ok(skipped(SkipReason::NoActionableTask));
        };

        if DedupGuard::new(&self.session).exists(&title).await? {
            tracing::info!("Skipping duplicate task: {}", title);
            return Ok(skipped(SkipReason::AlreadyExists));
        }

        // Description and subtasks come from one parse, so either being
        // empty means the model output was unusable.
        let enriched = self.enricher.enhance(&title).await;
        if !enriched.is_complete() {
            return Ok(skipped(SkipReason::NothingGenerated));
        }

        let task = TaskCreator::new(&self.session)
            .create(&enriched.title, &enriched.description)
            .await?;

        Ok(Outcome::Created {
            task,
            subtasks: enriched.subtasks,
        })
    }
}

fn skipped(reason: SkipReason) -> Outcome {
    Outcome::Skipped { reason }
}
