//! Login endpoint.

use crate::auth::BEARER_PREFIX;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::warn;

/// Authenticates a user and issues a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Unknown username or wrong password")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (user, role) = state
        .users
        .authenticate(&request.login, &request.password)
        .await
        .inspect_err(|err| {
            if matches!(err, ApiError::Unauthorized(_)) {
                warn!(login = %request.login, "rejected login attempt");
            }
        })?;

    let token = state.tokens.issue(&user.username, &role)?;

    Ok(Json(LoginResponse {
        token: format!("{}{}", BEARER_PREFIX, token),
    }))
}
