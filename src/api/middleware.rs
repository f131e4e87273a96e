//! Optional API-key authentication and rate limiting for the message webhook.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

const DEFAULT_RATE_LIMIT: u32 = 60;

/// Webhook security settings.
#[derive(Clone, Debug, Default)]
pub struct SecurityConfig {
    /// Bearer key callers must present (from TASKBRIDGE_API_KEY)
    pub api_key: Option<String>,
    /// Allowed CORS origins (from TASKBRIDGE_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
    pub rate_limiter: Option<RateLimiter>,
}

impl SecurityConfig {
    /// Load from environment variables. Rate limiting is only enabled
    /// together with an API key.
    pub fn from_env() -> Self {
        let api_key = std::env::var("TASKBRIDGE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let cors_origins = std::env::var("TASKBRIDGE_CORS_ORIGINS").ok().map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect()
        });

        let per_minute = std::env::var("TASKBRIDGE_RATE_LIMIT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT);

        let rate_limiter = api_key
            .as_ref()
            .map(|_| RateLimiter::new(per_minute, Duration::from_secs(60)));

        Self {
            api_key,
            cors_origins,
            rate_limiter,
        }
    }

    /// No authentication, no rate limiting, permissive CORS.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn with_rate_limit(max_requests: u32) -> Self {
        Self {
            rate_limiter: Some(RateLimiter::new(max_requests, Duration::from_secs(60))),
            ..Self::default()
        }
    }
}

/// Per-IP sliding-window rate limiter.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    hits: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record a request from `ip`; false if it exceeds the window budget.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let mut hits = self.hits.lock().expect("rate limiter lock poisoned");

        // Drop stale addresses while we hold the lock.
        hits.retain(|_, times| {
            times.retain(|&t| now.duration_since(t) < self.window);
            !times.is_empty()
        });

        let times = hits.entry(ip).or_default();
        if times.len() < self.max_requests as usize {
            times.push(now);
            true
        } else {
            false
        }
    }
}

/// Reject requests without the configured bearer key.
pub async fn auth_middleware(
    State(config): State<SecurityConfig>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = config.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let presented = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match presented {
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key on message webhook");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header on message webhook");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let ip = client_ip(&request);
    if limiter.check(ip) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Rate limit exceeded for {}", ip);
        Err(StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Client address from proxy headers, falling back to localhost.
fn client_ip(request: &Request<Body>) -> IpAddr {
    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    header("X-Forwarded-For")
        .and_then(|v| v.split(',').next().and_then(|ip| ip.trim().parse().ok()))
        .or_else(|| header("X-Real-IP").and_then(|v| v.trim().parse().ok()))
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
