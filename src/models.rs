//! Request and response models for the REST API.
//!
//! Wire field names are PascalCase. Every request type validates its
//! field-level constraints before any persistence is attempted.

use crate::config::PasswordPolicy;
use crate::db::{BidListRow, CurvePointRow, RatingRow, RuleNameRow, TradeRow, UserRow};
use crate::error::{ApiError, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Acknowledgment returned by every create operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned to the created record.
    #[serde(rename = "Id")]
    pub id: i32,
}

// ============================================================================
// Validation helpers
// ============================================================================

fn check_required(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", field)));
    }
}

fn check_max_len(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
}

fn check_opt_max_len(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        check_max_len(errors, field, value, max);
    }
}

fn check_non_negative(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    if let Some(value) = value
        && value < 0.0
    {
        errors.push(FieldError::new(
            field,
            format!("{} must not be negative", field),
        ));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Rejects an update payload whose embedded id contradicts the path id.
pub fn check_id_matches(payload_id: Option<i32>, path_id: i32) -> Result<(), ApiError> {
    match payload_id {
        Some(id) if id != path_id => Err(ApiError::invalid_field(
            "Id",
            "Id does not match the request path",
        )),
        _ => Ok(()),
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Login request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    /// Username.
    #[serde(rename = "Login")]
    pub login: String,
    /// Plaintext password.
    #[serde(rename = "Password")]
    pub password: String,
}

/// Login response carrying the scheme-prefixed token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Token string beginning with `Bearer `.
    #[serde(rename = "Token")]
    pub token: String,
}

// ============================================================================
// Bid List
// ============================================================================

/// Create/replace payload for a bid list entry.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BidListRequest {
    /// Identifier; only meaningful on replace, where it must match the path.
    #[serde(default)]
    pub id: Option<i32>,
    /// Account the bid belongs to.
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

impl BidListRequest {
    /// Validates field-level constraints.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Account", &self.account);
        check_max_len(&mut errors, "Account", &self.account, 30);
        check_required(&mut errors, "BidType", &self.bid_type);
        check_max_len(&mut errors, "BidType", &self.bid_type, 30);
        check_non_negative(&mut errors, "BidQuantity", self.bid_quantity);
        check_non_negative(&mut errors, "AskQuantity", self.ask_quantity);
        check_non_negative(&mut errors, "Bid", self.bid);
        check_non_negative(&mut errors, "Ask", self.ask);
        check_opt_max_len(&mut errors, "Status", self.status.as_deref(), 10);
        check_opt_max_len(&mut errors, "Trader", self.trader.as_deref(), 125);
        check_opt_max_len(&mut errors, "Book", self.book.as_deref(), 125);
        finish(errors)
    }
}

/// Bid list entry as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

impl From<BidListRow> for BidListResponse {
    fn from(row: BidListRow) -> Self {
        Self {
            id: row.id,
            account: row.account,
            bid_type: row.bid_type,
            bid_quantity: row.bid_quantity,
            ask_quantity: row.ask_quantity,
            bid: row.bid,
            ask: row.ask,
            status: row.status,
            trader: row.trader,
            book: row.book,
            creation_name: row.creation_name,
            creation_date: row.creation_date,
            revision_name: row.revision_name,
            revision_date: row.revision_date,
        }
    }
}

// ============================================================================
// Curve Point
// ============================================================================

/// Create/replace payload for a curve point.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CurvePointRequest {
    /// Identifier; only meaningful on replace, where it must match the path.
    #[serde(default)]
    pub id: Option<i32>,
    /// Identifier of the curve this point belongs to.
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

impl CurvePointRequest {
    /// Validates field-level constraints.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.curve_id < 0 {
            errors.push(FieldError::new("CurveId", "CurveId must not be negative"));
        }
        check_non_negative(&mut errors, "Term", self.term);
        finish(errors)
    }
}

/// Curve point as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

impl From<CurvePointRow> for CurvePointResponse {
    fn from(row: CurvePointRow) -> Self {
        Self {
            id: row.id,
            curve_id: row.curve_id,
            as_of_date: row.as_of_date,
            term: row.term,
            value: row.value,
            creation_date: row.creation_date,
        }
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Create/replace payload for a rating.
///
/// A create payload carrying an explicit `Id` takes the identity-insert path.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RatingRequest {
    /// Explicit identifier, preserved on create when supplied.
    #[serde(default)]
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

impl RatingRequest {
    /// Validates field-level constraints.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "MoodysRating", &self.moodys_rating);
        check_max_len(&mut errors, "MoodysRating", &self.moodys_rating, 125);
        check_required(&mut errors, "SandPRating", &self.sandp_rating);
        check_max_len(&mut errors, "SandPRating", &self.sandp_rating, 125);
        check_required(&mut errors, "FitchRating", &self.fitch_rating);
        check_max_len(&mut errors, "FitchRating", &self.fitch_rating, 125);
        if self.order_number < 0 {
            errors.push(FieldError::new(
                "OrderNumber",
                "OrderNumber must not be negative",
            ));
        }
        if let Some(id) = self.id
            && id <= 0
        {
            errors.push(FieldError::new("Id", "Id must be positive"));
        }
        finish(errors)
    }
}

/// Rating as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

impl From<RatingRow> for RatingResponse {
    fn from(row: RatingRow) -> Self {
        Self {
            id: row.id,
            moodys_rating: row.moodys_rating,
            sandp_rating: row.sandp_rating,
            fitch_rating: row.fitch_rating,
            order_number: row.order_number,
        }
    }
}

// ============================================================================
// Rule Name
// ============================================================================

/// Create/replace payload for a rule name.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RuleNameRequest {
    /// Identifier; only meaningful on replace, where it must match the path.
    #[serde(default)]
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

impl RuleNameRequest {
    /// Validates field-level constraints.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Name", &self.name);
        check_max_len(&mut errors, "Name", &self.name, 125);
        check_opt_max_len(&mut errors, "Description", self.description.as_deref(), 125);
        check_opt_max_len(&mut errors, "Json", self.json.as_deref(), 125);
        check_opt_max_len(&mut errors, "Template", self.template.as_deref(), 512);
        check_opt_max_len(&mut errors, "SqlStr", self.sql_str.as_deref(), 125);
        check_opt_max_len(&mut errors, "SqlPart", self.sql_part.as_deref(), 125);
        finish(errors)
    }
}

/// Rule name as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

impl From<RuleNameRow> for RuleNameResponse {
    fn from(row: RuleNameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            json: row.json,
            template: row.template,
            sql_str: row.sql_str,
            sql_part: row.sql_part,
        }
    }
}

// ============================================================================
// Trade
// ============================================================================

/// Create/replace payload for a trade.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TradeRequest {
    /// Identifier; only meaningful on replace, where it must match the path.
    #[serde(default)]
    pub id: Option<i32>,
    /// Account the trade belongs to.
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

impl TradeRequest {
    /// Validates field-level constraints.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Account", &self.account);
        check_max_len(&mut errors, "Account", &self.account, 30);
        check_required(&mut errors, "AccountType", &self.account_type);
        check_max_len(&mut errors, "AccountType", &self.account_type, 30);
        check_non_negative(&mut errors, "BuyQuantity", self.buy_quantity);
        check_non_negative(&mut errors, "SellQuantity", self.sell_quantity);
        check_non_negative(&mut errors, "BuyPrice", self.buy_price);
        check_non_negative(&mut errors, "SellPrice", self.sell_price);
        check_opt_max_len(&mut errors, "Currency", self.currency.as_deref(), 10);
        check_opt_max_len(&mut errors, "Security", self.security.as_deref(), 125);
        check_opt_max_len(&mut errors, "Status", self.status.as_deref(), 10);
        check_opt_max_len(&mut errors, "Trader", self.trader.as_deref(), 125);
        check_opt_max_len(&mut errors, "Book", self.book.as_deref(), 125);
        finish(errors)
    }
}

/// Trade as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

impl From<TradeRow> for TradeResponse {
    fn from(row: TradeRow) -> Self {
        Self {
            id: row.id,
            account: row.account,
            account_type: row.account_type,
            buy_quantity: row.buy_quantity,
            sell_quantity: row.sell_quantity,
            buy_price: row.buy_price,
            sell_price: row.sell_price,
            currency: row.currency,
            security: row.security,
            status: row.status,
            trader: row.trader,
            book: row.book,
            creation_name: row.creation_name,
            creation_date: row.creation_date,
            revision_name: row.revision_name,
            revision_date: row.revision_date,
        }
    }
}

// ============================================================================
// User
// ============================================================================

/// Create payload for a user account.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    /// Login name, unique.
    pub username: String,
    /// Plaintext password, checked against the configured policy.
    pub password: String,
    /// Display name.
    pub fullname: String,
    /// Role name to assign (`Admin` or `User`).
    pub role: String,
}

impl CreateUserRequest {
    /// Validates field-level constraints and the password policy.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Username", &self.username);
        check_max_len(&mut errors, "Username", &self.username, 125);
        check_required(&mut errors, "Fullname", &self.fullname);
        check_max_len(&mut errors, "Fullname", &self.fullname, 125);
        if let Some(message) = policy.check(&self.password) {
            errors.push(FieldError::new("Password", message));
        }
        check_role(&mut errors, &self.role);
        finish(errors)
    }
}

/// Replace payload for a user account.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    /// Identifier; must match the path when supplied.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Login name, unique.
    pub username: String,
    /// New plaintext password; omitted to keep the current one.
    #[serde(default)]
    pub password: Option<String>,
    /// Display name.
    pub fullname: String,
    /// Role name to assign (`Admin` or `User`).
    pub role: String,
}

impl UpdateUserRequest {
    /// Validates field-level constraints and the password policy.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming every offending field.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Username", &self.username);
        check_max_len(&mut errors, "Username", &self.username, 125);
        check_required(&mut errors, "Fullname", &self.fullname);
        check_max_len(&mut errors, "Fullname", &self.fullname, 125);
        if let Some(password) = &self.password
            && let Some(message) = policy.check(password)
        {
            errors.push(FieldError::new("Password", message));
        }
        check_role(&mut errors, &self.role);
        finish(errors)
    }
}

fn check_role(errors: &mut Vec<FieldError>, role: &str) {
    if role != crate::auth::ROLE_ADMIN && role != crate::auth::ROLE_USER {
        errors.push(FieldError::new("Role", "Role must be Admin or User"));
    }
}

/// User account as returned by the API. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    /// Identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Display name.
    pub fullname: String,
    /// Assigned role names.
    pub roles: Vec<String>,
}

impl UserResponse {
    /// Maps a row plus its role names into the response shape.
    #[must_use]
    pub fn from_row(row: UserRow, roles: Vec<String>) -> Self {
        Self {
            id: row.id,
            username: row.username,
            fullname: row.fullname,
            roles,
        }
    }
}

/// Acknowledgment returned by user create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserCreatedResponse {
    /// Identifier assigned to the created account.
    #[serde(rename = "Id")]
    pub id: Uuid,
}
