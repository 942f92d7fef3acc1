//! Rule name operations.

use crate::db::RuleNameRow;
use crate::error::ApiError;
use crate::models::RuleNameRequest;
use crate::repository::RuleNameRepository;

/// Service for rule name records.
#[derive(Clone)]
pub struct RuleNameService {
    repo: RuleNameRepository,
}

impl RuleNameService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: RuleNameRepository) -> Self {
        Self { repo }
    }

    /// Returns all rule names.
    pub async fn list(&self) -> Result<Vec<RuleNameRow>, ApiError> {
        self.repo.find_all().await
    }

    /// Returns one rule name or a not-found outcome.
    pub async fn get(&self, id: i32) -> Result<RuleNameRow, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("rule name {}", id)))
    }

    /// Creates a rule name.
    pub async fn create(&self, request: &RuleNameRequest) -> Result<i32, ApiError> {
        self.repo.insert(request).await
    }

    /// Replaces a rule name; the target id must exist.
    pub async fn update(&self, id: i32, request: &RuleNameRequest) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("rule name {}", id)));
        }
        self.repo.update(id, request).await?;
        Ok(())
    }

    /// Deletes a rule name; the target id must exist.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("rule name {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
