use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::entities::destination;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::AppState;

const NOT_FOUND: &str = "Destination not found";

#[derive(Debug, Deserialize)]
pub struct CreateDestinationRequest {
    pub destination: String,
    pub country: String,
    pub rating: f64,
    pub description: String,
}

/// Fields left out (or sent as `null`) keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDestinationRequest {
    pub destination: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND.to_string())
}

/// List all destinations
pub async fn list_destinations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<destination::Model>>> {
    let destinations = destination::Entity::find()
        .order_by_asc(destination::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(destinations))
}

/// Get a single destination
pub async fn get_destination(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<destination::Model>> {
    let destination = destination::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(destination))
}

/// Create a destination; the id is assigned by the database
pub async fn create_destination(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDestinationRequest>,
) -> AppResult<(StatusCode, Json<destination::Model>)> {
    let destination = destination::ActiveModel {
        destination: Set(payload.destination),
        country: Set(payload.country),
        rating: Set(payload.rating),
        description: Set(payload.description),
        ..Default::default()
    };

    let result = destination.insert(&state.db).await?;
    tracing::info!(id = result.id, "Destination created");

    Ok((StatusCode::CREATED, Json(result)))
}

/// Partially update a destination
pub async fn update_destination(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateDestinationRequest>,
) -> AppResult<Json<destination::Model>> {
    let existing = destination::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(not_found)?;

    let mut active: destination::ActiveModel = existing.clone().into();

    if let Some(name) = payload.destination {
        active.destination = Set(name);
    }

    if let Some(country) = payload.country {
        active.country = Set(country);
    }

    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }

    if let Some(description) = payload.description {
        active.description = Set(description);
    }

    if !active.is_changed() {
        return Ok(Json(existing));
    }

    // The row can vanish between the lookup and the write.
    let result = match active.update(&state.db).await {
        Ok(model) => model,
        Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => return Err(not_found()),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(id = result.id, "Destination updated");

    Ok(Json(result))
}

/// Delete a destination
pub async fn delete_destination(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let result = destination::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(not_found());
    }
    tracing::info!(id, "Destination deleted");

    Ok(Json(serde_json::json!({ "message": "Destination deleted successfully" })))
}
