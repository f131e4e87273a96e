use reqwest::Method;

use super::session::decode;
use super::{TrackerError, TrackerSession};
use crate::models::StorySummary;

/// Advisory check against re-filing a story that is already in the backlog.
///
/// This is a pre-check, not a lock: two runs for the same title can both pass
/// it before either creates the story.
pub struct DedupGuard<'a> {
    session: &'a TrackerSession,
}

impl<'a> DedupGuard<'a> {
    pub fn new(session: &'a TrackerSession) -> Self {
        Self { session }
    }

    /// Whether a user story with this subject exists, ignoring case.
    pub async fn exists(&self, title: &str) -> Result<bool, TrackerError> {
        let subjects = self.backlog_subjects().await?;
        let wanted = title.to_lowercase();
        Ok(subjects.iter().any(|s| s.to_lowercase() == wanted))
    }

    /// Subjects of every user story in the project.
    pub async fn backlog_subjects(&self) -> Result<Vec<String>, TrackerError> {
        let project_id = self.session.project_id().await?;
        let response = self
            .session
            .request(Method::GET, "/userstories")
            .await?
            .query(&[("project", project_id)])
            .send()
            .await?;

        let stories: Vec<StorySummary> = decode(response).await?;
        Ok(stories.into_iter().map(|s| s.subject).collect())
    }
}
