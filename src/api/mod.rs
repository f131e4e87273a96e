mod handlers;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{Settings, TrackerConfig};
use crate::llm::{LanguageModel, OllamaClient};
use crate::pipeline::Pipeline;
use crate::tracker::TrackerSession;

use middleware::{auth_middleware, rate_limit_middleware, SecurityConfig};

/// Shared handler state. Holds configuration and connection pools only; each
/// request builds its own [`Pipeline`] and tracker session from it.
#[derive(Clone)]
pub struct AppState {
    llm: Arc<dyn LanguageModel>,
    llm_timeout: Duration,
    tracker: Arc<TrackerConfig>,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        llm_timeout: Duration,
        tracker: TrackerConfig,
    ) -> reqwest::Result<Self> {
        let http = tracker.http_client()?;
        Ok(Self {
            llm,
            llm_timeout,
            tracker: Arc::new(tracker),
            http,
        })
    }

    /// State backed by the Ollama client.
    pub fn from_settings(settings: &Settings) -> reqwest::Result<Self> {
        let llm = Arc::new(OllamaClient::new(&settings.llm));
        Self::new(llm, settings.llm.timeout, settings.tracker.clone())
    }

    /// A pipeline with a fresh tracker session.
    pub fn pipeline(&self) -> Pipeline {
        let session = TrackerSession::new(self.tracker.clone(), self.http.clone());
        Pipeline::new(self.llm.clone(), self.llm_timeout, session)
    }
}

pub fn create_router(state: AppState, security: SecurityConfig) -> Router {
    let mut messages = Router::new()
        .route("/teams/message", post(handlers::receive_message))
        .route("/teams/message/", post(handlers::receive_message));

    if let Some(limiter) = security.rate_limiter.clone() {
        messages = messages.layer(from_fn_with_state(limiter, rate_limit_middleware));
    }
    if security.api_key.is_some() {
        messages = messages.layer(from_fn_with_state(security.clone(), auth_middleware));
    }

    let api = Router::new()
        .route("/health", get(handlers::health))
        .merge(messages);

    Router::new()
        .nest("/api/v1", api)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&security))
        .with_state(state)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    match &security.cors_origins {
        Some(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(
                origins
                    .iter()
                    .filter_map(|o| o.parse::<HeaderValue>().ok()),
            ))
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}
