//! Database row types for the six persisted entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Account record from the `users` table.
///
/// The password hash never leaves the db/service layers; response mapping
/// happens in the API models.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Login name, unique.
    pub username: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    /// Display name.
    pub fullname: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Bid list record from the `bid_list` table.
#[derive(Debug, Clone, FromRow)]
pub struct BidListRow {
    /// Unique identifier, store-assigned.
    pub id: i32,
    /// Account the bid belongs to.
    pub account: String,
    /// Bid type.
    pub bid_type: String,
    /// Bid quantity.
    pub bid_quantity: Option<f64>,
    /// Ask quantity.
    pub ask_quantity: Option<f64>,
    /// Bid price.
    pub bid: Option<f64>,
    /// Ask price.
    pub ask: Option<f64>,
    /// Status.
    pub status: Option<String>,
    /// Trader name.
    pub trader: Option<String>,
    /// Book name.
    pub book: Option<String>,
    /// Audit: creator name.
    pub creation_name: Option<String>,
    /// Audit: creation timestamp.
    pub creation_date: Option<DateTime<Utc>>,
    /// Audit: last revisor name.
    pub revision_name: Option<String>,
    /// Audit: last revision timestamp.
    pub revision_date: Option<DateTime<Utc>>,
}

/// Curve point record from the `curve_point` table.
///
/// `curve_id` is a bare identifier with no referential check.
#[derive(Debug, Clone, FromRow)]
pub struct CurvePointRow {
    /// Unique identifier, store-assigned.
    pub id: i32,
    /// Identifier of the curve this point belongs to.
    pub curve_id: i32,
    /// As-of date.
    pub as_of_date: Option<DateTime<Utc>>,
    /// Term in years.
    pub term: Option<f64>,
    /// Point value.
    pub value: Option<f64>,
    /// Record creation timestamp.
    pub creation_date: Option<DateTime<Utc>>,
}

/// Rating record from the `rating` table.
#[derive(Debug, Clone, FromRow)]
pub struct RatingRow {
    /// Unique identifier; store-assigned unless explicitly supplied.
    pub id: i32,
    /// Moody's rating.
    pub moodys_rating: String,
    /// Standard & Poor's rating.
    pub sandp_rating: String,
    /// Fitch rating.
    pub fitch_rating: String,
    /// Display ordering number.
    pub order_number: i32,
}

/// Rule name record from the `rule_name` table.
#[derive(Debug, Clone, FromRow)]
pub struct RuleNameRow {
    /// Unique identifier, store-assigned.
    pub id: i32,
    /// Rule name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// JSON blob.
    pub json: Option<String>,
    /// Template text.
    pub template: Option<String>,
    /// Full SQL string.
    pub sql_str: Option<String>,
    /// SQL fragment.
    pub sql_part: Option<String>,
}

/// Trade record from the `trade` table.
#[derive(Debug, Clone, FromRow)]
pub struct TradeRow {
    /// Unique identifier, store-assigned.
    pub id: i32,
    /// Account the trade belongs to.
    pub account: String,
    /// Account type.
    pub account_type: String,
    /// Buy quantity.
    pub buy_quantity: Option<f64>,
    /// Sell quantity.
    pub sell_quantity: Option<f64>,
    /// Buy price.
    pub buy_price: Option<f64>,
    /// Sell price.
    pub sell_price: Option<f64>,
    /// Settlement currency.
    pub currency: Option<String>,
    /// Security identifier.
    pub security: Option<String>,
    /// Status.
    pub status: Option<String>,
    /// Trader name.
    pub trader: Option<String>,
    /// Book name.
    pub book: Option<String>,
    /// Audit: creator name.
    pub creation_name: Option<String>,
    /// Audit: creation timestamp.
    pub creation_date: Option<DateTime<Utc>>,
    /// Audit: last revisor name.
    pub revision_name: Option<String>,
    /// Audit: last revision timestamp.
    pub revision_date: Option<DateTime<Utc>>,
}
