//! Request and response types mirroring the Trade Desk API wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(rename = "Login")]
    pub login: String,
    /// Plaintext password.
    #[serde(rename = "Password")]
    pub password: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Token string beginning with `Bearer `.
    #[serde(rename = "Token")]
    pub token: String,
}

/// Create acknowledgment for integer-keyed entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Identifier assigned to the created record.
    #[serde(rename = "Id")]
    pub id: i32,
}

/// Create acknowledgment for user accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedResponse {
    /// Identifier assigned to the created account.
    #[serde(rename = "Id")]
    pub id: String,
}

/// A single request-validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    #[serde(rename = "Field")]
    pub field: String,
    /// Constraint description.
    #[serde(rename = "Message")]
    pub message: String,
}

/// Validation error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Per-field validation failures.
    #[serde(rename = "Errors")]
    pub errors: Vec<FieldError>,
}

// ============================================================================
// Bid List
// ============================================================================

/// Create/replace payload for a bid list entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BidListRequest {
    /// Identifier, set on replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Account.
    pub account: String,
    /// Bid type.
    pub bid_type: String,
    /// Bid quantity.
    #[serde(default)]
    pub bid_quantity: Option<f64>,
    /// Ask quantity.
    #[serde(default)]
    pub ask_quantity: Option<f64>,
    /// Bid price.
    #[serde(default)]
    pub bid: Option<f64>,
    /// Ask price.
    #[serde(default)]
    pub ask: Option<f64>,
    /// Status.
    #[serde(default)]
    pub status: Option<String>,
    /// Trader name.
    #[serde(default)]
    pub trader: Option<String>,
    /// Book name.
    #[serde(default)]
    pub book: Option<String>,
}

/// Bid list entry returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BidListResponse {
    /// Identifier.
    pub id: i32,
    /// Account.
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

// ============================================================================
// Curve Point
// ============================================================================

/// Create/replace payload for a curve point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurvePointRequest {
    /// Identifier, set on replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Curve identifier.
    pub curve_id: i32,
    /// As-of date.
    #[serde(default)]
    pub as_of_date: Option<DateTime<Utc>>,
    /// Term in years.
    #[serde(default)]
    pub term: Option<f64>,
    /// Point value.
    #[serde(default)]
    pub value: Option<f64>,
}

/// Curve point returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurvePointResponse {
    /// Identifier.
    pub id: i32,
    /// Curve identifier.
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

// ============================================================================
// Rating
// ============================================================================

/// Create/replace payload for a rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingRequest {
    /// Explicit identifier, preserved on create when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Moody's rating.
    pub moodys_rating: String,
    /// Standard & Poor's rating.
    #[serde(rename = "SandPRating")]
    pub sandp_rating: String,
    /// Fitch rating.
    pub fitch_rating: String,
    /// Display ordering number.
    pub order_number: i32,
}

/// Rating returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingResponse {
    /// Identifier.
    pub id: i32,
    /// Moody's rating.
    pub moodys_rating: String,
    /// Standard & Poor's rating.
    #[serde(rename = "SandPRating")]
    pub sandp_rating: String,
    /// Fitch rating.
    pub fitch_rating: String,
    /// Display ordering number.
    pub order_number: i32,
}

// ============================================================================
// Rule Name
// ============================================================================

/// Create/replace payload for a rule name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleNameRequest {
    /// Identifier, set on replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Rule name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// JSON blob.
    #[serde(default)]
    pub json: Option<String>,
    /// Template text.
    #[serde(default)]
    pub template: Option<String>,
    /// Full SQL string.
    #[serde(default)]
    pub sql_str: Option<String>,
    /// SQL fragment.
    #[serde(default)]
    pub sql_part: Option<String>,
}

/// Rule name returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleNameResponse {
    /// Identifier.
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

// ============================================================================
// Trade
// ============================================================================

/// Create/replace payload for a trade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeRequest {
    /// Identifier, set on replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Account.
    pub account: String,
    /// Account type.
    pub account_type: String,
    /// Buy quantity.
    #[serde(default)]
    pub buy_quantity: Option<f64>,
    /// Sell quantity.
    #[serde(default)]
    pub sell_quantity: Option<f64>,
    /// Buy price.
    #[serde(default)]
    pub buy_price: Option<f64>,
    /// Sell price.
    #[serde(default)]
    pub sell_price: Option<f64>,
    /// Settlement currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Security identifier.
    #[serde(default)]
    pub security: Option<String>,
    /// Status.
    #[serde(default)]
    pub status: Option<String>,
    /// Trader name.
    #[serde(default)]
    pub trader: Option<String>,
    /// Book name.
    #[serde(default)]
    pub book: Option<String>,
}

/// Trade returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeResponse {
    /// Identifier.
    pub id: i32,
    /// Account.
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

// ============================================================================
// User
// ============================================================================

/// Create payload for a user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub fullname: String,
    /// Role name (`Admin` or `User`).
    pub role: String,
}

/// Replace payload for a user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    /// Identifier, set on replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login name.
    pub username: String,
    /// New plaintext password; omitted to keep the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name.
    pub fullname: String,
    /// Role name (`Admin` or `User`).
    pub role: String,
}

/// User account returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    /// Identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub fullname: String,
    /// Assigned role names.
    pub roles: Vec<String>,
}
