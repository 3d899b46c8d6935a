use axum::Json;

pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Travel Destinations API" }))
}
