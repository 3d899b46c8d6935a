use axum::{
    extract::{ConnectInfo, MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;

/// Log each request against its route template, e.g. `/destinations/{id}`,
/// so per-record traffic groups under one route.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| "<unmatched>".to_owned());
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(client_ip = %addr.ip(), %method, %route, "Rate limit exceeded");
    } else if status.is_server_error() {
        tracing::error!(
            client_ip = %addr.ip(),
            %method,
            %route,
            %path,
            %status,
            elapsed_ms,
            "Destination request failed"
        );
    } else {
        tracing::debug!(
            client_ip = %addr.ip(),
            %method,
            %route,
            %path,
            %status,
            elapsed_ms,
            "Destination request handled"
        );
    }

    response
}
