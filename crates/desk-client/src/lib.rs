//! HTTP client library for the Trade Desk API.
//!
//! This crate provides a typed HTTP client for interacting with the trade
//! desk backend. It covers the login flow and all REST endpoints; after a
//! successful login the returned token is presented on every guarded call.
//!
//! # Example
//!
//! ```no_run
//! use desk_client::{ClientConfig, DeskClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), desk_client::Error> {
//!     let mut client = DeskClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let login = client.login("admin", "Admin123!").await?;
//!     client.set_token(&login.token);
//!
//!     let ratings = client.list_ratings().await?;
//!     println!("{} ratings", ratings.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, DeskClient};
pub use error::Error;
pub use types::*;
