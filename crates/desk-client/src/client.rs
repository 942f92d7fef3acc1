//! HTTP client for the Trade Desk API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Trade Desk API.
#[derive(Debug, Clone)]
pub struct DeskClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl DeskClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Stores a token to present on subsequent guarded calls.
    ///
    /// Accepts either the scheme-prefixed string returned by login or a bare
    /// token.
    pub fn set_token(&mut self, token: &str) {
        let value = if token.starts_with("Bearer ") {
            token.to_string()
        } else {
            format!("Bearer {}", token)
        };
        self.token = Some(value);
    }

    /// Clears the stored token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Adds the stored token to a request, when present.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, token),
            None => builder,
        }
    }

    // ========================================================================
    // Health & Auth
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Authenticates and returns the login response. The returned token is
    /// not stored automatically; pass it to [`DeskClient::set_token`].
    ///
    /// # Errors
    /// Returns `Error::Unauthorized` on rejected credentials.
    pub async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, Error> {
        let url = format!("{}/api/auth/login", self.base_url);
        let body = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };
        let resp = self.client.post(&url).json(&body).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Bid Lists
    // ========================================================================

    /// Lists all bid list entries.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_bid_lists(&self) -> Result<Vec<BidListResponse>, Error> {
        let url = format!("{}/api/bidlist", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a bid list entry by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_bid_list(&self, id: i32) -> Result<BidListResponse, Error> {
        let url = format!("{}/api/bidlist/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a bid list entry.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_bid_list(&self, request: &BidListRequest) -> Result<CreatedResponse, Error> {
        let url = format!("{}/api/bidlist", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a bid list entry by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_bid_list(&self, id: i32, request: &BidListRequest) -> Result<(), Error> {
        let url = format!("{}/api/bidlist/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a bid list entry by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_bid_list(&self, id: i32) -> Result<(), Error> {
        let url = format!("{}/api/bidlist/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Curve Points
    // ========================================================================

    /// Lists all curve points.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_curve_points(&self) -> Result<Vec<CurvePointResponse>, Error> {
        let url = format!("{}/api/curvepoints", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a curve point by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_curve_point(&self, id: i32) -> Result<CurvePointResponse, Error> {
        let url = format!("{}/api/curvepoints/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a curve point.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_curve_point(
        &self,
        request: &CurvePointRequest,
    ) -> Result<CreatedResponse, Error> {
        let url = format!("{}/api/curvepoints", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a curve point by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_curve_point(
        &self,
        id: i32,
        request: &CurvePointRequest,
    ) -> Result<(), Error> {
        let url = format!("{}/api/curvepoints/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a curve point by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_curve_point(&self, id: i32) -> Result<(), Error> {
        let url = format!("{}/api/curvepoints/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Ratings
    // ========================================================================

    /// Lists all ratings.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_ratings(&self) -> Result<Vec<RatingResponse>, Error> {
        let url = format!("{}/api/ratings", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a rating by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_rating(&self, id: i32) -> Result<RatingResponse, Error> {
        let url = format!("{}/api/ratings/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a rating.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_rating(&self, request: &RatingRequest) -> Result<CreatedResponse, Error> {
        let url = format!("{}/api/ratings", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a rating by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_rating(&self, id: i32, request: &RatingRequest) -> Result<(), Error> {
        let url = format!("{}/api/ratings/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a rating by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_rating(&self, id: i32) -> Result<(), Error> {
        let url = format!("{}/api/ratings/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Rule Names
    // ========================================================================

    /// Lists all rule names.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_rule_names(&self) -> Result<Vec<RuleNameResponse>, Error> {
        let url = format!("{}/api/rulename", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a rule name by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_rule_name(&self, id: i32) -> Result<RuleNameResponse, Error> {
        let url = format!("{}/api/rulename/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a rule name.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_rule_name(
        &self,
        request: &RuleNameRequest,
    ) -> Result<CreatedResponse, Error> {
        let url = format!("{}/api/rulename", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a rule name by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_rule_name(&self, id: i32, request: &RuleNameRequest) -> Result<(), Error> {
        let url = format!("{}/api/rulename/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a rule name by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_rule_name(&self, id: i32) -> Result<(), Error> {
        let url = format!("{}/api/rulename/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Trades
    // ========================================================================

    /// Lists all trades.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_trades(&self) -> Result<Vec<TradeResponse>, Error> {
        let url = format!("{}/api/trades", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a trade by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_trade(&self, id: i32) -> Result<TradeResponse, Error> {
        let url = format!("{}/api/trades/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a trade.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_trade(&self, request: &TradeRequest) -> Result<CreatedResponse, Error> {
        let url = format!("{}/api/trades", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a trade by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_trade(&self, id: i32, request: &TradeRequest) -> Result<(), Error> {
        let url = format!("{}/api/trades/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a trade by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_trade(&self, id: i32) -> Result<(), Error> {
        let url = format!("{}/api/trades/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Lists all user accounts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, Error> {
        let url = format!("{}/api/users", self.base_url);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a user account by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, Error> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a user account.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<UserCreatedResponse, Error> {
        let url = format!("{}/api/users", self.base_url);
        let resp = self.authorize(self.client.post(&url)).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Replaces a user account by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<(), Error> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        let resp = self.authorize(self.client.put(&url)).json(request).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Deletes a user account by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Response handling
    // ========================================================================

    /// Deserializes a JSON body or maps the status to a client error.
    async fn handle_response<T: DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            Err(Self::status_error(status, resp).await)
        }
    }

    /// Accepts any success status without reading a body.
    async fn handle_empty_response(&self, resp: Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, resp).await)
        }
    }

    /// Maps a non-success response to the matching error variant.
    async fn status_error(status: StatusCode, resp: Response) -> Error {
        let message = resp.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
            StatusCode::FORBIDDEN => Error::Forbidden(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::BAD_REQUEST => Error::Validation(message),
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
