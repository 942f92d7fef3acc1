//! Unit tests for wire-shape serialization.

use super::*;

#[test]
fn test_login_request_serialization() {
    let request = LoginRequest {
        login: "admin".to_string(),
        password: "Admin123!".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"Login\":\"admin\""));
    assert!(json.contains("\"Password\":\"Admin123!\""));
}

#[test]
fn test_login_response_deserialization() {
    let json = r#"{"Token":"Bearer abc.def.ghi"}"#;
    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.token, "Bearer abc.def.ghi");
}

#[test]
fn test_created_response_deserialization() {
    let json = r#"{"Id":17}"#;
    let response: CreatedResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.id, 17);
}

#[test]
fn test_rating_request_serialization() {
    let request = RatingRequest {
        id: None,
        moodys_rating: "A1".to_string(),
        sandp_rating: "A+".to_string(),
        fitch_rating: "A".to_string(),
        order_number: 1,
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"MoodysRating\":\"A1\""));
    assert!(json.contains("\"SandPRating\":\"A+\""));
    assert!(json.contains("\"FitchRating\":\"A\""));
    assert!(json.contains("\"OrderNumber\":1"));
    // An absent id must not appear on the wire.
    assert!(!json.contains("\"Id\""));
}

#[test]
fn test_rating_request_with_explicit_id() {
    let request = RatingRequest {
        id: Some(42),
        moodys_rating: "A1".to_string(),
        sandp_rating: "A+".to_string(),
        fitch_rating: "A".to_string(),
        order_number: 1,
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"Id\":42"));
}

#[test]
fn test_rating_response_deserialization() {
    let json = r#"{"Id":3,"MoodysRating":"Baa1","SandPRating":"BBB+","FitchRating":"BBB","OrderNumber":9}"#;
    let response: RatingResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.id, 3);
    assert_eq!(response.moodys_rating, "Baa1");
    assert_eq!(response.sandp_rating, "BBB+");
    assert_eq!(response.fitch_rating, "BBB");
    assert_eq!(response.order_number, 9);
}

#[test]
fn test_bid_list_request_serialization() {
    let request = BidListRequest {
        account: "desk-1".to_string(),
        bid_type: "firm".to_string(),
        bid_quantity: Some(10.0),
        ..Default::default()
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"Account\":\"desk-1\""));
    assert!(json.contains("\"BidType\":\"firm\""));
    assert!(json.contains("\"BidQuantity\":10.0"));
}

#[test]
fn test_trade_response_deserialization() {
    let json = r#"{
        "Id": 5,
        "Account": "desk-2",
        "AccountType": "client",
        "BuyQuantity": 100.0,
        "SellQuantity": null,
        "BuyPrice": 101.5,
        "SellPrice": null,
        "Currency": "EUR",
        "Security": "XS0123456789",
        "Status": "live",
        "Trader": "alice",
        "Book": "book-a",
        "CreationName": "alice",
        "CreationDate": "2026-01-05T09:30:00Z",
        "RevisionName": null,
        "RevisionDate": null
    }"#;
    let response: TradeResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.id, 5);
    assert_eq!(response.account, "desk-2");
    assert_eq!(response.currency.as_deref(), Some("EUR"));
    assert_eq!(response.creation_name.as_deref(), Some("alice"));
    assert!(response.revision_date.is_none());
}

#[test]
fn test_curve_point_request_serialization() {
    let request = CurvePointRequest {
        id: None,
        curve_id: 10,
        as_of_date: None,
        term: Some(2.0),
        value: Some(1.5),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"CurveId\":10"));
    assert!(json.contains("\"Term\":2.0"));
    assert!(json.contains("\"Value\":1.5"));
}

#[test]
fn test_update_user_request_omits_absent_password() {
    let request = UpdateUserRequest {
        id: None,
        username: "alice".to_string(),
        password: None,
        fullname: "Alice".to_string(),
        role: "User".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("\"Password\""));
    assert!(!json.contains("\"Id\""));
}

#[test]
fn test_user_response_deserialization() {
    let json = r#"{
        "Id": "3f1e9a50-0000-0000-0000-000000000000",
        "Username": "alice",
        "Fullname": "Alice",
        "Roles": ["User"]
    }"#;
    let response: UserResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.username, "alice");
    assert_eq!(response.roles, vec!["User".to_string()]);
}

#[test]
fn test_validation_error_response_deserialization() {
    let json = r#"{"Errors":[{"Field":"Account","Message":"Account is required"}]}"#;
    let response: ValidationErrorResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].field, "Account");
}
