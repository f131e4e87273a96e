use reqwest::Method;

use super::session::decode;
use super::{TrackerError, TrackerSession};
use crate::models::{CreateUserStoryInput, UserStory};

/// Files new user stories in the session's project.
pub struct TaskCreator<'a> {
    session: &'a TrackerSession,
}

impl<'a> TaskCreator<'a> {
    pub fn new(session: &'a TrackerSession) -> Self {
        Self { session }
    }

    /// Create a story with the configured default priority.
    pub async fn create(&self, title: &str, description: &str) -> Result<UserStory, TrackerError> {
        let priority = self.session.config().default_priority;
        self.create_with_priority(title, description, priority).await
    }

    /// Create a story and return Taiga's record unchanged.
    pub async fn create_with_priority(
        &self,
        title: &str,
        description: &str,
        priority: i64,
    ) -> Result<UserStory, TrackerError> {
        let input = CreateUserStoryInput {
            project: self.session.project_id().await?,
            subject: title.to_string(),
            description: description.to_string(),
            priority,
        };

        let response = self
            .session
            .request(Method::POST, "/userstories")
            .await?
            .json(&input)
            .send()
            .await?;

        let story: UserStory = decode(response).await?;
        tracing::info!(id = ?story.id(), subject = ?story.subject(), "Created Taiga user story");
        Ok(story)
    }
}
