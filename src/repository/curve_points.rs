//! Data access for curve points.

use crate::db::CurvePointRow;
use crate::error::ApiError;
use crate::models::CurvePointRequest;
use chrono::Utc;
use sqlx::PgPool;

/// Repository for the `curve_point` table.
#[derive(Clone)]
pub struct CurvePointRepository {
    pool: PgPool,
}

impl CurvePointRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all curve points ordered by id.
    pub async fn find_all(&self) -> Result<Vec<CurvePointRow>, ApiError> {
        let rows = sqlx::query_as::<_, CurvePointRow>("SELECT * FROM curve_point ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one curve point, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CurvePointRow>, ApiError> {
        let row = sqlx::query_as::<_, CurvePointRow>("SELECT * FROM curve_point WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a curve point and returns the store-assigned id.
    pub async fn insert(&self, request: &CurvePointRequest) -> Result<i32, ApiError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO curve_point (curve_id, as_of_date, term, value, creation_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(request.curve_id)
        .bind(request.as_of_date)
        .bind(request.term)
        .bind(request.value)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replaces a curve point. Returns the number of affected rows.
    pub async fn update(&self, id: i32, request: &CurvePointRequest) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE curve_point
            SET curve_id = $1, as_of_date = $2, term = $3, value = $4
            WHERE id = $5
            "#,
        )
        .bind(request.curve_id)
        .bind(request.as_of_date)
        .bind(request.term)
        .bind(request.value)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a curve point. Returns the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM curve_point WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether a curve point with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM curve_point WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
