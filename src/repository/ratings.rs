//! Data access for ratings.

use crate::db::RatingRow;
use crate::error::ApiError;
use crate::models::RatingRequest;
use sqlx::PgPool;

/// Repository for the `rating` table.
///
/// Alone among the entity tables, `rating` supports inserting a row under a
/// caller-supplied primary key; see [`RatingRepository::insert_with_id`].
#[derive(Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all ratings ordered by id.
    pub async fn find_all(&self) -> Result<Vec<RatingRow>, ApiError> {
        let rows = sqlx::query_as::<_, RatingRow>("SELECT * FROM rating ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one rating, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<RatingRow>, ApiError> {
        let row = sqlx::query_as::<_, RatingRow>("SELECT * FROM rating WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a rating and returns the store-assigned id.
    pub async fn insert(&self, request: &RatingRequest) -> Result<i32, ApiError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO rating (moodys_rating, sandp_rating, fitch_rating, order_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&request.moodys_rating)
        .bind(&request.sandp_rating)
        .bind(&request.fitch_rating)
        .bind(request.order_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Inserts a rating under a caller-supplied primary key.
    ///
    /// The insert and the sequence advance run in a single transaction; the
    /// sequence must stay ahead of explicitly supplied ids or later default
    /// inserts would collide.
    pub async fn insert_with_id(&self, id: i32, request: &RatingRequest) -> Result<i32, ApiError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO rating (id, moodys_rating, sandp_rating, fitch_rating, order_number)
            OVERRIDING SYSTEM VALUE
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&request.moodys_rating)
        .bind(&request.sandp_rating)
        .bind(&request.fitch_rating)
        .bind(request.order_number)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('rating', 'id'), (SELECT MAX(id) FROM rating))",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replaces a rating. Returns the number of affected rows.
    pub async fn update(&self, id: i32, request: &RatingRequest) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE rating
            SET moodys_rating = $1, sandp_rating = $2, fitch_rating = $3, order_number = $4
            WHERE id = $5
            "#,
        )
        .bind(&request.moodys_rating)
        .bind(&request.sandp_rating)
        .bind(&request.fitch_rating)
        .bind(request.order_number)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a rating. Returns the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM rating WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether a rating with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rating WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
