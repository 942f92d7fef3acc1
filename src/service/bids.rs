//! Bid list operations.

use crate::db::BidListRow;
use crate::error::ApiError;
use crate::models::BidListRequest;
use crate::repository::BidListRepository;

/// Service for bid list records.
#[derive(Clone)]
pub struct BidListService {
    repo: BidListRepository,
}

impl BidListService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: BidListRepository) -> Self {
        Self { repo }
    }

    /// Returns all bid list entries.
    pub async fn list(&self) -> Result<Vec<BidListRow>, ApiError> {
        self.repo.find_all().await
    }

    /// Returns one entry or a not-found outcome.
    pub async fn get(&self, id: i32) -> Result<BidListRow, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("bid list {}", id)))
    }

    /// Creates an entry attributed to `actor`.
    pub async fn create(&self, request: &BidListRequest, actor: &str) -> Result<i32, ApiError> {
        self.repo.insert(request, actor).await
    }

    /// Replaces an entry; the target id must exist.
    pub async fn update(
        &self,
        id: i32,
        request: &BidListRequest,
        actor: &str,
    ) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("bid list {}", id)));
        }
        self.repo.update(id, request, actor).await?;
        Ok(())
    }

    /// Deletes an entry; the target id must exist.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("bid list {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
