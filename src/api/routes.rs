//! Route configuration.

use crate::api::{auth, bids, curve_points, health, ratings, rule_names, trades, users};
use crate::api::middleware::{require_admin, require_user};
use crate::state::AppState;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
///
/// The desk entities require the User or Admin role; account management is
/// Admin-only; login and health are public.
pub fn create_router(state: Arc<AppState>) -> Router {
    let desk = Router::new()
        // Bid lists
        .route(
            "/api/bidlist",
            get(bids::list_bid_lists).post(bids::create_bid_list),
        )
        .route(
            "/api/bidlist/{id}",
            get(bids::get_bid_list)
                .put(bids::update_bid_list)
                .delete(bids::delete_bid_list),
        )
        // Curve points
        .route(
            "/api/curvepoints",
            get(curve_points::list_curve_points).post(curve_points::create_curve_point),
        )
        .route(
            "/api/curvepoints/{id}",
            get(curve_points::get_curve_point)
                .put(curve_points::update_curve_point)
                .delete(curve_points::delete_curve_point),
        )
        // Ratings
        .route(
            "/api/ratings",
            get(ratings::list_ratings).post(ratings::create_rating),
        )
        .route(
            "/api/ratings/{id}",
            get(ratings::get_rating)
                .put(ratings::update_rating)
                .delete(ratings::delete_rating),
        )
        // Rule names
        .route(
            "/api/rulename",
            get(rule_names::list_rule_names).post(rule_names::create_rule_name),
        )
        .route(
            "/api/rulename/{id}",
            get(rule_names::get_rule_name)
                .put(rule_names::update_rule_name)
                .delete(rule_names::delete_rule_name),
        )
        // Trades
        .route(
            "/api/trades",
            get(trades::list_trades).post(trades::create_trade),
        )
        .route(
            "/api/trades/{id}",
            get(trades::get_trade)
                .put(trades::update_trade)
                .delete(trades::delete_trade),
        )
        .layer(from_fn_with_state(state.clone(), require_user));

    let admin = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/login", post(auth::login))
        .merge(desk)
        .merge(admin)
        .with_state(state)
}
