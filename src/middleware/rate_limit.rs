use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Per-IP rate limiting layer
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Build the per-IP governor: one token every `rate_limit_replenish_ms`,
/// holding at most `rate_limit_burst` tokens.
pub fn create_global_governor(config: &Config) -> AppResult<GlobalGovernorLayer> {
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(config.rate_limit_replenish_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| {
            AppError::Config(
                "RATE_LIMIT_REPLENISH_MS and RATE_LIMIT_BURST must be non-zero".to_string(),
            )
        })?;

    Ok(GovernorLayer::new(Arc::new(governor_config)))
}

/// Re-render the governor's plain-text 429 as a JSON message body.
/// Rate limit headers such as `retry-after` are kept.
pub async fn json_rate_limit_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);

    (
        parts,
        Json(serde_json::json!({ "message": "Too many requests" })),
    )
        .into_response()
}
