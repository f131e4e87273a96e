//! Authenticated access to one Taiga project.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::TrackerError;
use crate::config::TrackerConfig;

#[derive(Debug, Deserialize)]
struct AuthResponse {
    auth_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    id: i64,
}

/// Per-run tracker session.
///
/// The auth token and project id are each resolved on first use and reused for
/// the life of the session. There is no refresh: a token that expires mid-run
/// surfaces as a failed request.
#[derive(Debug)]
pub struct TrackerSession {
    config: Arc<TrackerConfig>,
    client: Client,
    token: OnceCell<String>,
    project_id: OnceCell<i64>,
}

impl TrackerSession {
    pub fn new(config: Arc<TrackerConfig>, client: Client) -> Self {
        Self {
            config,
            client,
            token: OnceCell::new(),
            project_id: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Bearer token, authenticating on first call.
    pub async fn token(&self) -> Result<&str, TrackerError> {
        let token = self
            .token
            .get_or_try_init(|| self.authenticate())
            .await?;
        Ok(token.as_str())
    }

    /// Numeric id of the configured project, looked up by slug on first call.
    pub async fn project_id(&self) -> Result<i64, TrackerError> {
        let id = self
            .project_id
            .get_or_try_init(|| self.lookup_project())
            .await?;
        Ok(*id)
    }

    async fn authenticate(&self) -> Result<String, TrackerError> {
        tracing::debug!(username = %self.config.username, "Authenticating with Taiga");

        let response = self
            .client
            .post(self.url("/auth"))
            .json(&serde_json::json!({
                "type": "normal",
                "username": self.config.username,
                "password": self.config.password,
            }))
            .send()
            .await
            .map_err(|e| TrackerError::Auth(e.to_string()))?;

        let body: AuthResponse = decode(response)
            .await
            .map_err(|e| TrackerError::Auth(e.to_string()))?;

        body.auth_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TrackerError::Auth("response carried no auth_token".to_string()))
    }

    async fn lookup_project(&self) -> Result<i64, TrackerError> {
        let slug = self.config.project_slug.as_str();
        let response = self
            .request(Method::GET, "/projects/by_slug")
            .await?
            .query(&[("slug", slug)])
            .send()
            .await
            .map_err(|e| TrackerError::Lookup(e.to_string()))?;

        let project: ProjectResponse = decode(response)
            .await
            .map_err(|e| TrackerError::Lookup(e.to_string()))?;

        tracing::debug!(slug, project_id = project.id, "Resolved Taiga project");
        Ok(project.id)
    }

    /// Build a request carrying the session's bearer token.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, TrackerError> {
        let token = self.token().await?;
        Ok(self.client.request(method, self.url(path)).bearer_auth(token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

/// Decode a success body, converting error statuses to [`TrackerError::Status`].
pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TrackerError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(TrackerError::Status { status, body })
    }
}
