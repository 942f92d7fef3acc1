//! Curve point operations.

use crate::db::CurvePointRow;
use crate::error::ApiError;
use crate::models::CurvePointRequest;
use crate::repository::CurvePointRepository;

/// Service for curve point records.
#[derive(Clone)]
pub struct CurvePointService {
    repo: CurvePointRepository,
}

impl CurvePointService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: CurvePointRepository) -> Self {
        Self { repo }
    }

    /// Returns all curve points.
    pub async fn list(&self) -> Result<Vec<CurvePointRow>, ApiError> {
        self.repo.find_all().await
    }

    /// Returns one curve point or a not-found outcome.
    pub async fn get(&self, id: i32) -> Result<CurvePointRow, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("curve point {}", id)))
    }

    /// Creates a curve point.
    pub async fn create(&self, request: &CurvePointRequest) -> Result<i32, ApiError> {
        self.repo.insert(request).await
    }

    /// Replaces a curve point; the target id must exist.
    pub async fn update(&self, id: i32, request: &CurvePointRequest) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("curve point {}", id)));
        }
        self.repo.update(id, request).await?;
        Ok(())
    }

    /// Deletes a curve point; the target id must exist.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("curve point {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
