//! Trade operations.

use crate::db::TradeRow;
use crate::error::ApiError;
use crate::models::TradeRequest;
use crate::repository::TradeRepository;

/// Service for trade records.
#[derive(Clone)]
pub struct TradeService {
    repo: TradeRepository,
}

impl TradeService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: TradeRepository) -> Self {
        Self { repo }
    }

    /// Returns all trades.
    pub async fn list(&self) -> Result<Vec<TradeRow>, ApiError> {
        self.repo.find_all().await
    }

    /// Returns one trade or a not-found outcome.
    pub async fn get(&self, id: i32) -> Result<TradeRow, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("trade {}", id)))
    }

    /// Creates a trade attributed to `actor`.
    pub async fn create(&self, request: &TradeRequest, actor: &str) -> Result<i32, ApiError> {
        self.repo.insert(request, actor).await
    }

    /// Replaces a trade; the target id must exist.
    pub async fn update(
        &self,
        id: i32,
        request: &TradeRequest,
        actor: &str,
    ) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("trade {}", id)));
        }
        self.repo.update(id, request, actor).await?;
        Ok(())
    }

    /// Deletes a trade; the target id must exist.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("trade {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
