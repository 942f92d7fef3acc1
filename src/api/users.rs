//! User account endpoints (admin only).

use crate::error::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserCreatedResponse, UserResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

/// List all user accounts.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All accounts", body = [UserResponse]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(
        users
            .into_iter()
            .map(|(row, roles)| UserResponse::from_row(row, roles))
            .collect(),
    ))
}

/// Get a user account by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "The account", body = UserResponse),
        (status = 404, description = "Unknown id")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let (row, roles) = state.users.get(id).await?;
    Ok(Json(UserResponse::from_row(row, roles)))
}

/// Create a user account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = UserCreatedResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), ApiError> {
    request.validate(&state.password_policy)?;
    let id = state.users.create(&request).await?;
    Ok((StatusCode::CREATED, Json(UserCreatedResponse { id })))
}

/// Replace a user account by id.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Account identifier")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate(&state.password_policy)?;
    if let Some(payload_id) = request.id
        && payload_id != id
    {
        return Err(ApiError::invalid_field(
            "Id",
            "Id does not match the request path",
        ));
    }
    state.users.update(id, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user account by id.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Account identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
