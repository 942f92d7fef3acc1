//! API routes module.

pub mod auth;
pub mod bids;
pub mod curve_points;
pub mod health;
pub mod middleware;
pub mod ratings;
pub mod routes;
pub mod rule_names;
pub mod trades;
pub mod users;

pub use routes::create_router;
