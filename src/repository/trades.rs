//! Data access for trades.

use crate::db::TradeRow;
use crate::error::ApiError;
use crate::models::TradeRequest;
use chrono::Utc;
use sqlx::PgPool;

/// Repository for the `trade` table.
#[derive(Clone)]
pub struct TradeRepository {
    pool: PgPool,
}

impl TradeRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all trades ordered by id.
    pub async fn find_all(&self) -> Result<Vec<TradeRow>, ApiError> {
        let rows = sqlx::query_as::<_, TradeRow>("SELECT * FROM trade ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one trade, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TradeRow>, ApiError> {
        let row = sqlx::query_as::<_, TradeRow>("SELECT * FROM trade WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a trade, stamping the creation audit fields, and returns the
    /// store-assigned id.
    pub async fn insert(&self, request: &TradeRequest, actor: &str) -> Result<i32, ApiError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO trade
                (account, account_type, buy_quantity, sell_quantity, buy_price, sell_price,
                 currency, security, status, trader, book, creation_name, creation_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&request.account)
        .bind(&request.account_type)
        .bind(request.buy_quantity)
        .bind(request.sell_quantity)
        .bind(request.buy_price)
        .bind(request.sell_price)
        .bind(&request.currency)
        .bind(&request.security)
        .bind(&request.status)
        .bind(&request.trader)
        .bind(&request.book)
        .bind(actor)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replaces a trade, stamping the revision audit fields. Returns the
    /// number of affected rows.
    pub async fn update(
        &self,
        id: i32,
        request: &TradeRequest,
        actor: &str,
    ) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE trade
            SET account = $1, account_type = $2, buy_quantity = $3, sell_quantity = $4,
                buy_price = $5, sell_price = $6, currency = $7, security = $8, status = $9,
                trader = $10, book = $11, revision_name = $12, revision_date = $13
            WHERE id = $14
            "#,
        )
        .bind(&request.account)
        .bind(&request.account_type)
        .bind(request.buy_quantity)
        .bind(request.sell_quantity)
        .bind(request.buy_price)
        .bind(request.sell_price)
        .bind(&request.currency)
        .bind(&request.security)
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

    /// Deletes a trade. Returns the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM trade WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether a trade with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM trade WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
