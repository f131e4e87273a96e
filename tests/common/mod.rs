//! Shared fixtures: a scripted language model and a mock Taiga API.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use taskbridge::config::TrackerConfig;
use taskbridge::llm::{LanguageModel, LlmError};
use taskbridge::pipeline::Pipeline;
use taskbridge::tracker::TrackerSession;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";
pub const PROJECT_ID: i64 = 17;
pub const SLUG: &str = "backend";

/// Language model with fixed replies for the extraction and enrichment prompts.
/// `None` simulates an unreachable model.
pub struct ScriptedModel {
    extraction: Option<String>,
    enrichment: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(extraction: Option<&str>, enrichment: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            extraction: extraction.map(String::from),
            enrichment: enrichment.map(String::from),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn enrichment_calls(&self) -> usize {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| is_enrichment(p))
            .count()
    }
}

fn is_enrichment(prompt: &str) -> bool {
    prompt.contains("Task Title:")
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(&self, prompt: &str, _timeout: Duration) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = if is_enrichment(prompt) {
            &self.enrichment
        } else {
            &self.extraction
        };
        reply.clone().ok_or(LlmError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "model offline".to_string(),
        })
    }
}

/// Language model that panics on every call.
pub struct PanickingModel;

#[async_trait]
impl LanguageModel for PanickingModel {
    async fn generate(&self, _prompt: &str, _timeout: Duration) -> Result<String, LlmError> {
        panic!("model client crashed");
    }
}

pub fn tracker_config(server: &MockServer) -> TrackerConfig {
    TrackerConfig::new(format!("{}/api/v1/", server.uri()), "bot", "secret", SLUG)
}

pub fn session(server: &MockServer) -> TrackerSession {
    TrackerSession::new(Arc::new(tracker_config(server)), reqwest::Client::new())
}

pub fn pipeline(model: Arc<ScriptedModel>, server: &MockServer) -> Pipeline {
    Pipeline::new(model, Duration::from_secs(1), session(server))
}

pub async fn mount_auth(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth"))
        .and(body_partial_json(json!({
            "type": "normal",
            "username": "bot",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "auth_token": TOKEN })))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_project(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/by_slug"))
        .and(query_param("slug", SLUG))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": PROJECT_ID, "slug": SLUG })),
        )
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_backlog(server: &MockServer, subjects: &[&str], times: u64) {
    let stories: Vec<Value> = subjects
        .iter()
        .enumerate()
        .map(|(i, s)| json!({ "id": i + 1, "subject": s, "status": 1 }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/userstories"))
        .and(query_param("project", PROJECT_ID.to_string().as_str()))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(stories))
        .expect(times)
        .mount(server)
        .await;
}

/// Echo the submitted story back with an id, the way Taiga does.
pub async fn mount_create(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1/userstories"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(|request: &wiremock::Request| {
            let mut body: Value = serde_json::from_slice(&request.body).unwrap();
            body["id"] = json!(901);
            body["ref"] = json!(12);
            ResponseTemplate::new(201).set_body_json(body)
        })
        .expect(times)
        .mount(server)
        .await;
}

/// A mounted tracker that must not be called at all.
pub async fn mount_untouched_tracker(server: &MockServer) {
    mount_auth(server, 0).await;
    mount_project(server, 0).await;
    mount_backlog(server, &[], 0).await;
    mount_create(server, 0).await;
}

pub const LOGIN_ENRICHMENT: &str = "Description: Investigate and resolve login failure\n\
Subtasks:\n\
- Reproduce issue\n\
- Identify root cause\n\
- Deploy fix\n";
