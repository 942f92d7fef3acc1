//! Bearer-token authentication and role guards.

use crate::auth::{BEARER_PREFIX, Claims, ROLE_ADMIN, ROLE_USER};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Strips the scheme label from an `Authorization` header value.
fn extract_bearer(header: Option<&str>) -> Result<&str, ApiError> {
    match header {
        Some(value) if value.starts_with(BEARER_PREFIX) => Ok(&value[BEARER_PREFIX.len()..]),
        Some(_) => Err(ApiError::Unauthorized(
            "Authorization header must use the Bearer scheme".to_string(),
        )),
        None => Err(ApiError::Unauthorized(
            "Missing Authorization header".to_string(),
        )),
    }
}

/// Returns an error unless the claimed role is in the allowed set.
fn check_role(claims: &Claims, allowed: &[&str]) -> Result<(), ApiError> {
    if allowed.contains(&claims.role.as_str()) {
        Ok(())
    } else {
        warn!(
            subject = %claims.sub,
            role = %claims.role,
            "caller role outside the required set"
        );
        Err(ApiError::Forbidden(format!(
            "{} role required",
            allowed.join(" or ")
        )))
    }
}

/// Verifies the bearer token and checks the role claim against `allowed`.
///
/// On success the claims are stored in the request extensions for handlers.
async fn guard(
    state: Arc<AppState>,
    mut request: Request<Body>,
    next: Next,
    allowed: &[&str],
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = match extract_bearer(header).and_then(|token| state.tokens.verify(token)) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    if let Err(err) = check_role(&claims, allowed) {
        return err.into_response();
    }

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Guard for endpoints any authenticated user may call.
pub async fn require_user(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    guard(state, request, next, &[ROLE_USER, ROLE_ADMIN]).await
}

/// Guard for admin-only endpoints.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    guard(state, request, next, &[ROLE_ADMIN]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str) -> Claims {
        Claims {
            sub: "alice".to_string(),
            role: role.to_string(),
            iss: "desk".to_string(),
            aud: "desk-ui".to_string(),
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn test_extract_bearer_valid() {
        let token = extract_bearer(Some("Bearer abc.def.ghi")).expect("should extract");
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_missing_header() {
        assert!(extract_bearer(None).is_err());
    }

    #[test]
    fn test_extract_bearer_wrong_scheme() {
        assert!(extract_bearer(Some("Basic dXNlcjpwYXNz")).is_err());
    }

    #[test]
    fn test_check_role_allows_member() {
        assert!(check_role(&claims(ROLE_USER), &[ROLE_USER, ROLE_ADMIN]).is_ok());
        assert!(check_role(&claims(ROLE_ADMIN), &[ROLE_ADMIN]).is_ok());
    }

    #[test]
    fn test_check_role_rejects_outsider() {
        let err = check_role(&claims(ROLE_USER), &[ROLE_ADMIN]).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
