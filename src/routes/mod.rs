use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::handlers::{destination, home};
use crate::middleware::logging::log_request;
use crate::middleware::rate_limit::{create_global_governor, json_rate_limit_response};
use crate::AppState;

/// API routes without the serving middleware; used directly by tests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route(
            "/destinations",
            get(destination::list_destinations).post(destination::create_destination),
        )
        .route(
            "/destinations/{id}",
            get(destination::get_destination)
                .put(destination::update_destination)
                .delete(destination::delete_destination),
        )
        .fallback(fallback)
        .with_state(state)
}

/// Full application as served. Requires connect info for the per-IP layers.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let governor = create_global_governor(&state.config)?;

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(middleware::from_fn(log_request))
            .layer(middleware::from_fn(json_rate_limit_response))
            .layer(governor),
    );

    Ok(app)
}

async fn fallback() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Resource not found" })),
    )
}
