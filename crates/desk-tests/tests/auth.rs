//! Authentication and authorization flow tests.

use desk_client::{CreateUserRequest, Error};
use desk_tests::{admin_credentials, create_admin_client, create_test_client, unique_name};

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let client = create_test_client().expect("Failed to create client");
    let (username, password) = admin_credentials();

    let login = client.login(&username, &password).await.expect("Login failed");

    assert!(login.token.starts_with("Bearer "));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let client = create_test_client().expect("Failed to create client");
    let (username, _) = admin_credentials();

    let result = client.login(&username, "definitely-wrong").await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_login_unknown_username_is_unauthorized() {
    let client = create_test_client().expect("Failed to create client");

    let result = client.login(&unique_name("ghost"), "Whatever123!").await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_guarded_endpoint_rejects_missing_token() {
    let client = create_test_client().expect("Failed to create client");

    let result = client.list_ratings().await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_guarded_endpoint_rejects_garbage_token() {
    let mut client = create_test_client().expect("Failed to create client");
    client.set_token("not.a.jwt");

    let result = client.list_ratings().await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_user_role_cannot_manage_accounts() {
    let admin = create_admin_client().await;

    // Create a regular user, then act as them.
    let username = unique_name("user");
    admin
        .create_user(&CreateUserRequest {
            username: username.clone(),
            password: "Secret123!".to_string(),
            fullname: "Test User".to_string(),
            role: "User".to_string(),
        })
        .await
        .expect("Failed to create user");

    let mut user_client = create_test_client().expect("Failed to create client");
    let login = user_client
        .login(&username, "Secret123!")
        .await
        .expect("User login failed");
    user_client.set_token(&login.token);

    // The structurally valid token lacks the Admin role.
    let result = user_client.list_users().await;
    assert!(matches!(result, Err(Error::Forbidden(_))));

    // Desk endpoints accept the User role.
    user_client.list_ratings().await.expect("User should read ratings");
}
