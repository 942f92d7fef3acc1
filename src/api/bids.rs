//! Bid list endpoints.

use crate::auth::Claims;
use crate::error::ApiError;
use crate::models::{BidListRequest, BidListResponse, CreatedResponse, check_id_matches};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// List all bid list entries.
#[utoipa::path(
    get,
    path = "/api/bidlist",
    responses(
        (status = 200, description = "All bid list entries", body = [BidListResponse]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "BidList"
)]
pub async fn list_bid_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BidListResponse>>, ApiError> {
    let rows = state.bids.list().await?;
    Ok(Json(rows.into_iter().map(BidListResponse::from).collect()))
}

/// Get a bid list entry by id.
#[utoipa::path(
    get,
    path = "/api/bidlist/{id}",
    params(
        ("id" = i32, Path, description = "Bid list identifier")
    ),
    responses(
        (status = 200, description = "The entry", body = BidListResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "BidList"
)]
pub async fn get_bid_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<BidListResponse>, ApiError> {
    let row = state.bids.get(id).await?;
    Ok(Json(row.into()))
}

/// Create a bid list entry; the caller is recorded as creator.
#[utoipa::path(
    post,
    path = "/api/bidlist",
    request_body = BidListRequest,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "BidList"
)]
pub async fn create_bid_list(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<BidListRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;
    let id = state.bids.create(&request, &claims.sub).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace a bid list entry by id; the caller is recorded as revisor.
#[utoipa::path(
    put,
    path = "/api/bidlist/{id}",
    params(
        ("id" = i32, Path, description = "Bid list identifier")
    ),
    request_body = BidListRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "BidList"
)]
pub async fn update_bid_list(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(request): Json<BidListRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    check_id_matches(request.id, id)?;
    state.bids.update(id, &request, &claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a bid list entry by id.
#[utoipa::path(
    delete,
    path = "/api/bidlist/{id}",
    params(
        ("id" = i32, Path, description = "Bid list identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "BidList"
)]
pub async fn delete_bid_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.bids.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
