//! Data-access adapters, one per persisted entity.

pub mod bids;
pub mod curve_points;
pub mod ratings;
pub mod rule_names;
pub mod trades;
pub mod users;

pub use bids::BidListRepository;
pub use curve_points::CurvePointRepository;
pub use ratings::RatingRepository;
pub use rule_names::RuleNameRepository;
pub use trades::TradeRepository;
pub use users::UserRepository;
