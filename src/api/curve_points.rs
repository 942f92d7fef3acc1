//! Curve point endpoints.

use crate::error::ApiError;
use crate::models::{CreatedResponse, CurvePointRequest, CurvePointResponse, check_id_matches};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// List all curve points.
#[utoipa::path(
    get,
    path = "/api/curvepoints",
    responses(
        (status = 200, description = "All curve points", body = [CurvePointResponse]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "CurvePoints"
)]
pub async fn list_curve_points(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CurvePointResponse>>, ApiError> {
    let rows = state.curve_points.list().await?;
    Ok(Json(
        rows.into_iter().map(CurvePointResponse::from).collect(),
    ))
}

/// Get a curve point by id.
#[utoipa::path(
    get,
    path = "/api/curvepoints/{id}",
    params(
        ("id" = i32, Path, description = "Curve point identifier")
    ),
    responses(
        (status = 200, description = "The curve point", body = CurvePointResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "CurvePoints"
)]
pub async fn get_curve_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CurvePointResponse>, ApiError> {
    let row = state.curve_points.get(id).await?;
    Ok(Json(row.into()))
}

/// Create a curve point.
#[utoipa::path(
    post,
    path = "/api/curvepoints",
    request_body = CurvePointRequest,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "CurvePoints"
)]
pub async fn create_curve_point(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CurvePointRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;
    let id = state.curve_points.create(&request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace a curve point by id.
#[utoipa::path(
    put,
    path = "/api/curvepoints/{id}",
    params(
        ("id" = i32, Path, description = "Curve point identifier")
    ),
    request_body = CurvePointRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "CurvePoints"
)]
pub async fn update_curve_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<CurvePointRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    check_id_matches(request.id, id)?;
    state.curve_points.update(id, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a curve point by id.
#[utoipa::path(
    delete,
    path = "/api/curvepoints/{id}",
    params(
        ("id" = i32, Path, description = "Curve point identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "CurvePoints"
)]
pub async fn delete_curve_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.curve_points.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
