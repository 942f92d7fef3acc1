//! Data access for rule names.

use crate::db::RuleNameRow;
use crate::error::ApiError;
use crate::models::RuleNameRequest;
use sqlx::PgPool;

/// Repository for the `rule_name` table.
#[derive(Clone)]
pub struct RuleNameRepository {
    pool: PgPool,
}

impl RuleNameRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all rule names ordered by id.
    pub async fn find_all(&self) -> Result<Vec<RuleNameRow>, ApiError> {
        let rows = sqlx::query_as::<_, RuleNameRow>("SELECT * FROM rule_name ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one rule name, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<RuleNameRow>, ApiError> {
        let row = sqlx::query_as::<_, RuleNameRow>("SELECT * FROM rule_name WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a rule name and returns the store-assigned id.
    pub async fn insert(&self, request: &RuleNameRequest) -> Result<i32, ApiError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO rule_name (name, description, json, template, sql_str, sql_part)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.json)
        .bind(&request.template)
        .bind(&request.sql_str)
        .bind(&request.sql_part)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replaces a rule name. Returns the number of affected rows.
    pub async fn update(&self, id: i32, request: &RuleNameRequest) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE rule_name
            SET name = $1, description = $2, json = $3, template = $4, sql_str = $5, sql_part = $6
            WHERE id = $7
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.json)
        .bind(&request.template)
        .bind(&request.sql_str)
        .bind(&request.sql_part)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a rule name. Returns the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM rule_name WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether a rule name with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rule_name WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
