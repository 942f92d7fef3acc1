//! Rule name endpoints.

use crate::error::ApiError;
use crate::models::{CreatedResponse, RuleNameRequest, RuleNameResponse, check_id_matches};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// List all rule names.
#[utoipa::path(
    get,
    path = "/api/rulename",
    responses(
        (status = 200, description = "All rule names", body = [RuleNameResponse]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "RuleNames"
)]
pub async fn list_rule_names(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RuleNameResponse>>, ApiError> {
    let rows = state.rule_names.list().await?;
    Ok(Json(rows.into_iter().map(RuleNameResponse::from).collect()))
}

/// Get a rule name by id.
#[utoipa::path(
    get,
    path = "/api/rulename/{id}",
    params(
        ("id" = i32, Path, description = "Rule name identifier")
    ),
    responses(
        (status = 200, description = "The rule name", body = RuleNameResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "RuleNames"
)]
pub async fn get_rule_name(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<RuleNameResponse>, ApiError> {
    let row = state.rule_names.get(id).await?;
    Ok(Json(row.into()))
}

/// Create a rule name.
#[utoipa::path(
    post,
    path = "/api/rulename",
    request_body = RuleNameRequest,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "RuleNames"
)]
pub async fn create_rule_name(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RuleNameRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;
    let id = state.rule_names.create(&request).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace a rule name by id.
#[utoipa::path(
    put,
    path = "/api/rulename/{id}",
    params(
        ("id" = i32, Path, description = "Rule name identifier")
    ),
    request_body = RuleNameRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "RuleNames"
)]
pub async fn update_rule_name(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<RuleNameRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;
    check_id_matches(request.id, id)?;
    state.rule_names.update(id, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a rule name by id.
#[utoipa::path(
    delete,
    path = "/api/rulename/{id}",
    params(
        ("id" = i32, Path, description = "Rule name identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "RuleNames"
)]
pub async fn delete_rule_name(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.rule_names.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
