//! Unit tests for request validation and wire shapes.

use super::*;
use crate::error::ApiError;

fn rating_request() -> RatingRequest {
    RatingRequest {
        id: None,
        moodys_rating: "A1".to_string(),
        sandp_rating: "A+".to_string(),
        fitch_rating: "A".to_string(),
        order_number: 1,
    }
}

fn trade_request() -> TradeRequest {
    TradeRequest {
        id: None,
        account: "desk-1".to_string(),
        account_type: "client".to_string(),
        buy_quantity: Some(100.0),
        sell_quantity: None,
        buy_price: Some(101.25),
        sell_price: None,
        currency: Some("USD".to_string()),
        security: Some("XS0123456789".to_string()),
        status: None,
        trader: None,
        book: None,
    }
}

// ============================================================================
// Serde Shape Tests
// ============================================================================

#[test]
fn test_rating_request_wire_names() {
    let json = r#"{"MoodysRating":"A1","SandPRating":"A+","FitchRating":"A","OrderNumber":1}"#;
    let request: RatingRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.moodys_rating, "A1");
    assert_eq!(request.sandp_rating, "A+");
    assert_eq!(request.fitch_rating, "A");
    assert_eq!(request.order_number, 1);
    assert_eq!(request.id, None);
}

#[test]
fn test_rating_response_wire_names() {
    let response = RatingResponse {
        id: 7,
        moodys_rating: "A1".to_string(),
        sandp_rating: "A+".to_string(),
        fitch_rating: "A".to_string(),
        order_number: 1,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"Id\":7"));
    assert!(json.contains("\"MoodysRating\":\"A1\""));
    assert!(json.contains("\"SandPRating\":\"A+\""));
    assert!(json.contains("\"OrderNumber\":1"));
}

#[test]
fn test_login_request_wire_names() {
    let json = r#"{"Login":"alice","Password":"Secret123!"}"#;
    let request: LoginRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.login, "alice");
    assert_eq!(request.password, "Secret123!");
}

#[test]
fn test_created_response_wire_name() {
    let json = serde_json::to_string(&CreatedResponse { id: 3 }).unwrap();
    assert_eq!(json, r#"{"Id":3}"#);
}

#[test]
fn test_user_response_never_exposes_hash() {
    let json = serde_json::to_string(&UserResponse {
        id: Uuid::nil(),
        username: "alice".to_string(),
        fullname: "Alice".to_string(),
        roles: vec!["User".to_string()],
    })
    .unwrap();

    assert!(!json.to_lowercase().contains("password"));
    assert!(!json.to_lowercase().contains("hash"));
}

// ============================================================================
// Rating Validation
// ============================================================================

#[test]
fn test_rating_valid() {
    assert!(rating_request().validate().is_ok());
}

#[test]
fn test_rating_empty_required_string() {
    let mut request = rating_request();
    request.moodys_rating = String::new();

    let err = request.validate().unwrap_err();
    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "MoodysRating");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_rating_negative_order_number() {
    let mut request = rating_request();
    request.order_number = -1;

    let err = request.validate().unwrap_err();
    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].field, "OrderNumber");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_rating_collects_multiple_errors() {
    let request = RatingRequest {
        id: Some(0),
        moodys_rating: String::new(),
        sandp_rating: String::new(),
        fitch_rating: "A".to_string(),
        order_number: -5,
    };

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert!(fields.contains(&"MoodysRating"));
            assert!(fields.contains(&"SandPRating"));
            assert!(fields.contains(&"OrderNumber"));
            assert!(fields.contains(&"Id"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Bid List Validation
// ============================================================================

#[test]
fn test_bid_list_valid() {
    let request = BidListRequest {
        id: None,
        account: "desk-1".to_string(),
        bid_type: "firm".to_string(),
        bid_quantity: Some(10.0),
        ask_quantity: None,
        bid: Some(99.5),
        ask: Some(100.5),
        status: Some("live".to_string()),
        trader: None,
        book: None,
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_bid_list_account_too_long() {
    let request = BidListRequest {
        id: None,
        account: "a".repeat(31),
        bid_type: "firm".to_string(),
        bid_quantity: None,
        ask_quantity: None,
        bid: None,
        ask: None,
        status: None,
        trader: None,
        book: None,
    };

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "Account"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_bid_list_negative_quantity() {
    let request = BidListRequest {
        id: None,
        account: "desk-1".to_string(),
        bid_type: "firm".to_string(),
        bid_quantity: Some(-1.0),
        ask_quantity: None,
        bid: None,
        ask: None,
        status: None,
        trader: None,
        book: None,
    };

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "BidQuantity"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Curve Point Validation
// ============================================================================

#[test]
fn test_curve_point_valid() {
    let request = CurvePointRequest {
        id: None,
        curve_id: 10,
        as_of_date: None,
        term: Some(2.5),
        value: Some(1.75),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_curve_point_negative_curve_id() {
    let request = CurvePointRequest {
        id: None,
        curve_id: -1,
        as_of_date: None,
        term: None,
        value: None,
    };

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "CurveId"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Rule Name Validation
// ============================================================================

#[test]
fn test_rule_name_requires_name() {
    let request = RuleNameRequest {
        id: None,
        name: "   ".to_string(),
        description: None,
        json: None,
        template: None,
        sql_str: None,
        sql_part: None,
    };

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "Name"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Trade Validation
// ============================================================================

#[test]
fn test_trade_valid() {
    assert!(trade_request().validate().is_ok());
}

#[test]
fn test_trade_negative_price() {
    let mut request = trade_request();
    request.buy_price = Some(-0.01);

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "BuyPrice"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_trade_currency_too_long() {
    let mut request = trade_request();
    request.currency = Some("US DOLLARS.".to_string());

    match request.validate().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "Currency"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// User Validation
// ============================================================================

#[test]
fn test_create_user_valid() {
    let request = CreateUserRequest {
        username: "alice".to_string(),
        password: "Secret123!".to_string(),
        fullname: "Alice".to_string(),
        role: "User".to_string(),
    };
    assert!(request.validate(&PasswordPolicy::default()).is_ok());
}

#[test]
fn test_create_user_weak_password() {
    let request = CreateUserRequest {
        username: "alice".to_string(),
        password: "weak".to_string(),
        fullname: "Alice".to_string(),
        role: "User".to_string(),
    };

    match request.validate(&PasswordPolicy::default()).unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "Password"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_create_user_unknown_role() {
    let request = CreateUserRequest {
        username: "alice".to_string(),
        password: "Secret123!".to_string(),
        fullname: "Alice".to_string(),
        role: "Superuser".to_string(),
    };

    match request.validate(&PasswordPolicy::default()).unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].field, "Role"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_update_user_password_optional() {
    let request = UpdateUserRequest {
        id: None,
        username: "alice".to_string(),
        password: None,
        fullname: "Alice".to_string(),
        role: "Admin".to_string(),
    };
    assert!(request.validate(&PasswordPolicy::default()).is_ok());
}

// ============================================================================
// Path/Payload Id Agreement
// ============================================================================

#[test]
fn test_check_id_matches() {
    assert!(check_id_matches(None, 5).is_ok());
    assert!(check_id_matches(Some(5), 5).is_ok());
    assert!(check_id_matches(Some(6), 5).is_err());
}
