//! Rating operations.

use crate::db::RatingRow;
use crate::error::ApiError;
use crate::models::RatingRequest;
use crate::repository::RatingRepository;

/// Service for rating records.
#[derive(Clone)]
pub struct RatingService {
    repo: RatingRepository,
}

impl RatingService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: RatingRepository) -> Self {
        Self { repo }
    }

    /// Returns all ratings.
    pub async fn list(&self) -> Result<Vec<RatingRow>, ApiError> {
        self.repo.find_all().await
    }

    /// Returns one rating or a not-found outcome.
    pub async fn get(&self, id: i32) -> Result<RatingRow, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("rating {}", id)))
    }

    /// Creates a rating; a payload carrying an explicit id takes the
    /// identity-insert path.
    pub async fn create(&self, request: &RatingRequest) -> Result<i32, ApiError> {
        match request.id {
            Some(id) => {
                if self.repo.exists(id).await? {
                    return Err(ApiError::invalid_field("Id", "Id is already in use"));
                }
                self.repo.insert_with_id(id, request).await
            }
            None => self.repo.insert(request).await,
        }
    }

    /// Replaces a rating; the target id must exist.
    pub async fn update(&self, id: i32, request: &RatingRequest) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("rating {}", id)));
        }
        self.repo.update(id, request).await?;
        Ok(())
    }

    /// Deletes a rating; the target id must exist.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("rating {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
