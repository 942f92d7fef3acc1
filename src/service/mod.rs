//! Thin orchestration layer above the repositories: existence checks before
//! update/delete and translation into API errors.

pub mod bids;
pub mod curve_points;
pub mod ratings;
pub mod rule_names;
pub mod trades;
pub mod users;

pub use bids::BidListService;
pub use curve_points::CurvePointService;
pub use ratings::RatingService;
pub use rule_names::RuleNameService;
pub use trades::TradeService;
pub use users::UserService;
