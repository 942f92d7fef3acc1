//! Rating endpoints.

use crate::error::ApiError;
use crate::models::{CreatedResponse, RatingRequest, RatingResponse, check_id_matches};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// List all ratings.
#[utoipa::path(
    get,
    path = "/api/ratings",
    responses(
        (status = 200, description = "All ratings", body = [RatingResponse]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Ratings"
)]
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RatingResponse>>, ApiError> {
    let rows = state.ratings.list().await?;
    Ok(Json(rows.into_iter().map(RatingResponse::from).collect()))
}

/// Get a rating by id.
#[utoipa::path(
    get,
    path = "/api/ratings/{id}",
    params(
        ("id" = i32, Path, description = "Rating identifier")
    ),
    responses(
        (status = 200, description = "The rating", body = RatingResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "Ratings"
)]
pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<RatingResponse>, ApiError> {
    let row = state.ratings.get(id).await?;
    Ok(Json(row.into()))
}

/// Create a rating.
///
/// A payload carrying an explicit `Id` preserves that id on insert.
#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = RatingRequest,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "Ratings"
)]
pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RatingRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;
    let id = state.ratings.create(&request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace a rating by id.
#[utoipa::path(
    put,
    path = "/api/ratings/{id}",
    params(
        ("id" = i32, Path, description = "Rating identifier")
    ),
    request_body = RatingRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Ratings"
)]
pub async fn update_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<RatingRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    check_id_matches(request.id, id)?;
    state.ratings.update(id, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a rating by id.
#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    params(
        ("id" = i32, Path, description = "Rating identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Ratings"
)]
pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.ratings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
