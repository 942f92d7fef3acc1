//! Rating CRUD cycle tests, including the explicit-id create path.

use desk_client::{Error, RatingRequest};
use desk_tests::create_admin_client;

fn sample_rating() -> RatingRequest {
    RatingRequest {
        id: None,
        moodys_rating: "A1".to_string(),
        sandp_rating: "A+".to_string(),
        fitch_rating: "A".to_string(),
        order_number: 1,
    }
}

#[tokio::test]
async fn test_rating_full_lifecycle() {
    let client = create_admin_client().await;

    // Create
    let created = client
        .create_rating(&sample_rating())
        .await
        .expect("Create failed");
    assert!(created.id > 0);

    // Read back: fields match what was submitted
    let fetched = client.get_rating(created.id).await.expect("Get failed");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.moodys_rating, "A1");
    assert_eq!(fetched.sandp_rating, "A+");
    assert_eq!(fetched.fitch_rating, "A");
    assert_eq!(fetched.order_number, 1);

    // Replace
    let mut update = sample_rating();
    update.order_number = 2;
    client
        .update_rating(created.id, &update)
        .await
        .expect("Update failed");
    let fetched = client.get_rating(created.id).await.expect("Get failed");
    assert_eq!(fetched.order_number, 2);

    // Delete, then the id is gone
    client.delete_rating(created.id).await.expect("Delete failed");
    let result = client.get_rating(created.id).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_rating_create_with_explicit_id() {
    let client = create_admin_client().await;

    // Pick an id clear of the identity sequence.
    let existing = client.list_ratings().await.expect("List failed");
    let explicit_id = existing.iter().map(|r| r.id).max().unwrap_or(0) + 1000;

    let mut request = sample_rating();
    request.id = Some(explicit_id);

    let created = client.create_rating(&request).await.expect("Create failed");
    assert_eq!(created.id, explicit_id);

    let fetched = client.get_rating(explicit_id).await.expect("Get failed");
    assert_eq!(fetched.id, explicit_id);

    // A later default insert must not collide with the explicit id.
    let next = client
        .create_rating(&sample_rating())
        .await
        .expect("Follow-up create failed");
    assert!(next.id > explicit_id);

    client.delete_rating(explicit_id).await.expect("Cleanup failed");
    client.delete_rating(next.id).await.expect("Cleanup failed");
}

#[tokio::test]
async fn test_rating_update_missing_id_is_not_found() {
    let client = create_admin_client().await;

    let result = client.update_rating(999_999_999, &sample_rating()).await;

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_rating_delete_missing_id_is_not_found() {
    let client = create_admin_client().await;

    let result = client.delete_rating(999_999_999).await;

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_rating_validation_rejects_empty_field() {
    let client = create_admin_client().await;

    let mut request = sample_rating();
    request.moodys_rating = String::new();

    let result = client.create_rating(&request).await;
    match result {
        Err(Error::Validation(body)) => assert!(body.contains("MoodysRating")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rating_validation_rejects_negative_order_number() {
    let client = create_admin_client().await;

    let mut request = sample_rating();
    request.order_number = -1;

    let result = client.create_rating(&request).await;
    match result {
        Err(Error::Validation(body)) => assert!(body.contains("OrderNumber")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rating_update_id_mismatch_is_rejected() {
    let client = create_admin_client().await;

    let created = client
        .create_rating(&sample_rating())
        .await
        .expect("Create failed");

    let mut update = sample_rating();
    update.id = Some(created.id + 1);

    let result = client.update_rating(created.id, &update).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    client.delete_rating(created.id).await.expect("Cleanup failed");
}
