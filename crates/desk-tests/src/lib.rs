//! Integration tests for the Trade Desk API.
//!
//! These tests require the API server to be running against a seeded
//! database. Configure via environment variables:
//!
//! - `API_BASE_URL` (default `http://localhost:8080`)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` (default `admin` / `Admin123!`,
//!   matching the default seed configuration)

use desk_client::{ClientConfig, DeskClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Gets the seeded admin credentials from environment or uses defaults.
#[must_use]
pub fn admin_credentials() -> (String, String) {
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Admin123!".to_string());
    (username, password)
}

/// Creates an unauthenticated test client.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<DeskClient, desk_client::Error> {
    DeskClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// Creates a client logged in as the seeded admin.
///
/// # Panics
/// Panics if the login fails; every guarded test depends on it.
pub async fn create_admin_client() -> DeskClient {
    let mut client = create_test_client().expect("Failed to create client");
    let (username, password) = admin_credentials();
    let login = client
        .login(&username, &password)
        .await
        .expect("Admin login failed");
    client.set_token(&login.token);
    client
}

/// Generates a unique name to avoid conflicts between tests.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}
