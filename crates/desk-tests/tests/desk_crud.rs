//! CRUD cycle tests for bid lists, curve points, rule names and trades.

use desk_client::{BidListRequest, CurvePointRequest, Error, RuleNameRequest, TradeRequest};
use desk_tests::{create_admin_client, unique_name};

// ============================================================================
// Bid Lists
// ============================================================================

#[tokio::test]
async fn test_bid_list_lifecycle() {
    let client = create_admin_client().await;

    let request = BidListRequest {
        account: "desk-1".to_string(),
        bid_type: "firm".to_string(),
        bid_quantity: Some(10.0),
        ask_quantity: Some(12.0),
        bid: Some(99.5),
        ask: Some(100.5),
        status: Some("live".to_string()),
        ..Default::default()
    };

    let created = client.create_bid_list(&request).await.expect("Create failed");

    let fetched = client.get_bid_list(created.id).await.expect("Get failed");
    assert_eq!(fetched.account, "desk-1");
    assert_eq!(fetched.bid_type, "firm");
    assert_eq!(fetched.bid_quantity, Some(10.0));
    // The creating caller is stamped into the audit fields.
    assert!(fetched.creation_name.is_some());
    assert!(fetched.creation_date.is_some());
    assert!(fetched.revision_name.is_none());

    let mut update = request.clone();
    update.status = Some("closed".to_string());
    client
        .update_bid_list(created.id, &update)
        .await
        .expect("Update failed");

    let fetched = client.get_bid_list(created.id).await.expect("Get failed");
    assert_eq!(fetched.status.as_deref(), Some("closed"));
    assert!(fetched.revision_name.is_some());
    assert!(fetched.revision_date.is_some());

    client.delete_bid_list(created.id).await.expect("Delete failed");
    assert!(matches!(
        client.get_bid_list(created.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_bid_list_validation_rejects_missing_account() {
    let client = create_admin_client().await;

    let request = BidListRequest {
        account: String::new(),
        bid_type: "firm".to_string(),
        ..Default::default()
    };

    let result = client.create_bid_list(&request).await;
    match result {
        Err(Error::Validation(body)) => assert!(body.contains("Account")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Curve Points
// ============================================================================

#[tokio::test]
async fn test_curve_point_lifecycle() {
    let client = create_admin_client().await;

    let request = CurvePointRequest {
        id: None,
        curve_id: 10,
        as_of_date: None,
        term: Some(2.0),
        value: Some(1.5),
    };

    let created = client
        .create_curve_point(&request)
        .await
        .expect("Create failed");

    let fetched = client
        .get_curve_point(created.id)
        .await
        .expect("Get failed");
    assert_eq!(fetched.curve_id, 10);
    assert_eq!(fetched.term, Some(2.0));
    assert_eq!(fetched.value, Some(1.5));
    assert!(fetched.creation_date.is_some());

    let mut update = request.clone();
    update.value = Some(1.75);
    client
        .update_curve_point(created.id, &update)
        .await
        .expect("Update failed");

    let fetched = client
        .get_curve_point(created.id)
        .await
        .expect("Get failed");
    assert_eq!(fetched.value, Some(1.75));

    client
        .delete_curve_point(created.id)
        .await
        .expect("Delete failed");
    assert!(matches!(
        client.get_curve_point(created.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_curve_point_update_missing_id_is_not_found() {
    let client = create_admin_client().await;

    let request = CurvePointRequest {
        id: None,
        curve_id: 1,
        as_of_date: None,
        term: None,
        value: None,
    };

    let result = client.update_curve_point(999_999_999, &request).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

// ============================================================================
// Rule Names
// ============================================================================

#[tokio::test]
async fn test_rule_name_lifecycle() {
    let client = create_admin_client().await;

    let name = unique_name("rule");
    let request = RuleNameRequest {
        name: name.clone(),
        description: Some("limit check".to_string()),
        json: Some("{}".to_string()),
        template: Some("select 1".to_string()),
        ..Default::default()
    };

    let created = client
        .create_rule_name(&request)
        .await
        .expect("Create failed");

    let fetched = client.get_rule_name(created.id).await.expect("Get failed");
    assert_eq!(fetched.name, name);
    assert_eq!(fetched.description.as_deref(), Some("limit check"));

    let mut update = request.clone();
    update.description = Some("revised".to_string());
    client
        .update_rule_name(created.id, &update)
        .await
        .expect("Update failed");

    let fetched = client.get_rule_name(created.id).await.expect("Get failed");
    assert_eq!(fetched.description.as_deref(), Some("revised"));

    client
        .delete_rule_name(created.id)
        .await
        .expect("Delete failed");
    assert!(matches!(
        client.get_rule_name(created.id).await,
        Err(Error::NotFound(_))
    ));
}

// ============================================================================
// Trades
// ============================================================================

#[tokio::test]
async fn test_trade_lifecycle() {
    let client = create_admin_client().await;

    let request = TradeRequest {
        account: "desk-2".to_string(),
        account_type: "client".to_string(),
        buy_quantity: Some(100.0),
        buy_price: Some(101.25),
        currency: Some("EUR".to_string()),
        security: Some("XS0123456789".to_string()),
        ..Default::default()
    };

    let created = client.create_trade(&request).await.expect("Create failed");

    let fetched = client.get_trade(created.id).await.expect("Get failed");
    assert_eq!(fetched.account, "desk-2");
    assert_eq!(fetched.buy_quantity, Some(100.0));
    assert_eq!(fetched.currency.as_deref(), Some("EUR"));
    assert!(fetched.creation_name.is_some());

    let mut update = request.clone();
    update.sell_quantity = Some(40.0);
    update.sell_price = Some(101.9);
    client
        .update_trade(created.id, &update)
        .await
        .expect("Update failed");

    let fetched = client.get_trade(created.id).await.expect("Get failed");
    assert_eq!(fetched.sell_quantity, Some(40.0));
    assert!(fetched.revision_name.is_some());

    client.delete_trade(created.id).await.expect("Delete failed");
    assert!(matches!(
        client.get_trade(created.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_trade_validation_rejects_negative_quantity() {
    let client = create_admin_client().await;

    let request = TradeRequest {
        account: "desk-2".to_string(),
        account_type: "client".to_string(),
        buy_quantity: Some(-5.0),
        ..Default::default()
    };

    let result = client.create_trade(&request).await;
    match result {
        Err(Error::Validation(body)) => assert!(body.contains("BuyQuantity")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_trade_delete_missing_id_is_not_found() {
    let client = create_admin_client().await;

    let result = client.delete_trade(999_999_999).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_list_endpoints_return_collections() {
    let client = create_admin_client().await;

    // An empty collection is a valid, non-error result; these must simply
    // not fail.
    client.list_bid_lists().await.expect("List bid lists failed");
    client.list_curve_points().await.expect("List curve points failed");
    client.list_rule_names().await.expect("List rule names failed");
    client.list_trades().await.expect("List trades failed");
}
