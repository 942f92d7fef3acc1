//! Unit tests for client error display.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 500,
        message: "Internal server error".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "API error (500): Internal server error"
    );
}

#[test]
fn test_not_found_display() {
    let error = Error::NotFound("rating 42".to_string());
    assert_eq!(format!("{}", error), "Not found: rating 42");
}

#[test]
fn test_unauthorized_display() {
    let error = Error::Unauthorized("bad credentials".to_string());
    assert_eq!(format!("{}", error), "Unauthorized: bad credentials");
}

#[test]
fn test_validation_display() {
    let error = Error::Validation("Account is required".to_string());
    assert_eq!(format!("{}", error), "Validation failed: Account is required");
}
