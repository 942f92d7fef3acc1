//! Unit tests for error module.

use super::*;

// ============================================================================
// Response Body Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Internal server error".to_string(),
        code: "INTERNAL_ERROR".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"Internal server error\""));
    assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
}

#[test]
fn test_validation_error_response_serialization() {
    let response = ValidationErrorResponse {
        errors: vec![FieldError::new("Account", "Account is required")],
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"Errors\""));
    assert!(json.contains("\"Field\":\"Account\""));
    assert!(json.contains("\"Message\":\"Account is required\""));
}

// ============================================================================
// Status Mapping Tests
// ============================================================================

#[test]
fn test_validation_maps_to_400() {
    let error = ApiError::invalid_field("OrderNumber", "OrderNumber must not be negative");
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_not_found_maps_to_404() {
    let error = ApiError::NotFound("rating 42".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_unauthorized_maps_to_401() {
    let error = ApiError::Unauthorized("Invalid credentials".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_forbidden_maps_to_403() {
    let error = ApiError::Forbidden("Admin role required".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_database_maps_to_500() {
    let error = ApiError::Database("connection reset".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_maps_to_500() {
    let error = ApiError::Internal("poisoned".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_not_found_display() {
    let error = ApiError::NotFound("trade 7".to_string());
    assert_eq!(format!("{}", error), "not found: trade 7");
}

#[test]
fn test_validation_display_counts_fields() {
    let error = ApiError::Validation(vec![
        FieldError::new("Account", "required"),
        FieldError::new("BidQuantity", "must not be negative"),
    ]);
    assert_eq!(format!("{}", error), "validation failed on 2 field(s)");
}

#[test]
fn test_from_sqlx_error() {
    let error: ApiError = sqlx::Error::RowNotFound.into();
    assert!(matches!(error, ApiError::Database(_)));
}
