//! Trade endpoints.

use crate::auth::Claims;
use crate::error::ApiError;
use crate::models::{CreatedResponse, TradeRequest, TradeResponse, check_id_matches};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// List all trades.
#[utoipa::path(
    get,
    path = "/api/trades",
    responses(
        (status = 200, description = "All trades", body = [TradeResponse]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Trades"
)]
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TradeResponse>>, ApiError> {
    let rows = state.trades.list().await?;
    Ok(Json(rows.into_iter().map(TradeResponse::from).collect()))
}

/// Get a trade by id.
#[utoipa::path(
    get,
    path = "/api/trades/{id}",
    params(
        ("id" = i32, Path, description = "Trade identifier")
    ),
    responses(
        (status = 200, description = "The trade", body = TradeResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "Trades"
)]
pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TradeResponse>, ApiError> {
    let row = state.trades.get(id).await?;
    Ok(Json(row.into()))
}

/// Create a trade; the caller is recorded as creator.
#[utoipa::path(
    post,
    path = "/api/trades",
    request_body = TradeRequest,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "Trades"
)]
pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<TradeRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;
    let id = state.trades.create(&request, &claims.sub).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace a trade by id; the caller is recorded as revisor.
#[utoipa::path(
    put,
    path = "/api/trades/{id}",
    params(
        ("id" = i32, Path, description = "Trade identifier")
    ),
    request_body = TradeRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Trades"
)]
pub async fn update_trade(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(request): Json<TradeRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    check_id_matches(request.id, id)?;
    state.trades.update(id, &request, &claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a trade by id.
#[utoipa::path(
    delete,
    path = "/api/trades/{id}",
    params(
        ("id" = i32, Path, description = "Trade identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Trades"
)]
pub async fn delete_trade(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.trades.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
