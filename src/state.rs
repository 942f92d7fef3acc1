//! Application state management.

use crate::auth::TokenIssuer;
use crate::config::{Config, PasswordPolicy};
use crate::db::DatabasePool;
use crate::repository::{
    BidListRepository, CurvePointRepository, RatingRepository, RuleNameRepository,
    TradeRepository, UserRepository,
};
use crate::service::{
    BidListService, CurvePointService, RatingService, RuleNameService, TradeService, UserService,
};

/// Application state shared across all handlers.
pub struct AppState {
    /// Bid list service.
    pub bids: BidListService,
    /// Curve point service.
    pub curve_points: CurvePointService,
    /// Rating service.
    pub ratings: RatingService,
    /// Rule name service.
    pub rule_names: RuleNameService,
    /// Trade service.
    pub trades: TradeService,
    /// User account service.
    pub users: UserService,
    /// Token issuer for login and request verification.
    pub tokens: TokenIssuer,
    /// Password policy applied to user payloads.
    pub password_policy: PasswordPolicy,
}

impl AppState {
    /// Wires repositories and services over the database pool.
    #[must_use]
    pub fn new(db: &DatabasePool, config: &Config) -> Self {
        let pool = db.pool().clone();

        Self {
            bids: BidListService::new(BidListRepository::new(pool.clone())),
            curve_points: CurvePointService::new(CurvePointRepository::new(pool.clone())),
            ratings: RatingService::new(RatingRepository::new(pool.clone())),
            rule_names: RuleNameService::new(RuleNameRepository::new(pool.clone())),
            trades: TradeService::new(TradeRepository::new(pool.clone())),
            users: UserService::new(UserRepository::new(pool)),
            tokens: TokenIssuer::new(&config.auth),
            password_policy: config.password_policy.clone(),
        }
    }
}
