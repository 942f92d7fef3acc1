//! Unit tests for client construction and token handling.

use super::*;

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_trims_trailing_slash() {
    let client = DeskClient::with_base_url("http://localhost:8080/").expect("should build");
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_set_token_prefixes_bare_token() {
    let mut client = DeskClient::with_base_url("http://localhost:8080").expect("should build");

    client.set_token("abc.def.ghi");
    assert_eq!(client.token.as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn test_set_token_keeps_prefixed_token() {
    let mut client = DeskClient::with_base_url("http://localhost:8080").expect("should build");

    client.set_token("Bearer abc.def.ghi");
    assert_eq!(client.token.as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn test_clear_token() {
    let mut client = DeskClient::with_base_url("http://localhost:8080").expect("should build");

    client.set_token("abc");
    client.clear_token();
    assert!(client.token.is_none());
}
