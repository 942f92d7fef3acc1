//! Data access for bid list entries.

use crate::db::BidListRow;
use crate::error::ApiError;
use crate::models::BidListRequest;
use chrono::Utc;
use sqlx::PgPool;

/// Repository for the `bid_list` table.
#[derive(Clone)]
pub struct BidListRepository {
    pool: PgPool,
}

impl BidListRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all bid list entries ordered by id.
    pub async fn find_all(&self) -> Result<Vec<BidListRow>, ApiError> {
        let rows = sqlx::query_as::<_, BidListRow>("SELECT * FROM bid_list ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one entry, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BidListRow>, ApiError> {
        let row = sqlx::query_as::<_, BidListRow>("SELECT * FROM bid_list WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts an entry, stamping the creation audit fields, and returns the
    /// store-assigned id.
    pub async fn insert(&self, request: &BidListRequest, actor: &str) -> Result<i32, ApiError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO bid_list
                (account, bid_type, bid_quantity, ask_quantity, bid, ask,
                 status, trader, book, creation_name, creation_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&request.account)
        .bind(&request.bid_type)
        .bind(request.bid_quantity)
        .bind(request.ask_quantity)
        .bind(request.bid)
        .bind(request.ask)
        .bind(&request.status)
        .bind(&request.trader)
        .bind(&request.book)
        .bind(actor)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replaces an entry, stamping the revision audit fields. Returns the
    /// number of affected rows.
    pub async fn update(
        &self,
        id: i32,
        request: &BidListRequest,
        actor: &str,
    ) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE bid_list
            SET account = $1, bid_type = $2, bid_quantity = $3, ask_quantity = $4,
                bid = $5, ask = $6, status = $7, trader = $8, book = $9,
                revision_name = $10, revision_date = $11
            WHERE id = $12
            "#,
        )
        .bind(&request.account)
        .bind(&request.bid_type)
        .bind(request.bid_quantity)
        .bind(request.ask_quantity)
        .bind(request.bid)
        .bind(request.ask)
        .bind(&request.status)
        .bind(&request.trader)
        .bind(&request.book)
        .bind(actor)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes an entry. Returns the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM bid_list WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether an entry with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bid_list WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
