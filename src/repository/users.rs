//! Data access for user accounts and role membership.

use crate::db::UserRow;
use crate::error::ApiError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for the `users`, `roles` and `user_roles` tables.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all user accounts ordered by username.
    pub async fn find_all(&self) -> Result<Vec<UserRow>, ApiError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Returns one account, or `None` if the id is unknown.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRow>, ApiError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns one account by username, or `None` if unknown.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRow>, ApiError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns the account's role names ordered by role id.
    pub async fn roles_for(&self, user_id: Uuid) -> Result<Vec<String>, ApiError> {
        let roles: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    /// Inserts an account under a fresh id and returns it.
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
        fullname: &str,
    ) -> Result<Uuid, ApiError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, fullname)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(fullname)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replaces an account's mutable fields; the password hash is kept when
    /// `password_hash` is `None`. Returns the number of affected rows.
    pub async fn update(
        &self,
        id: Uuid,
        username: &str,
        password_hash: Option<&str>,
        fullname: &str,
    ) -> Result<u64, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $1,
                password_hash = COALESCE($2, password_hash),
                fullname = $3
            WHERE id = $4
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(fullname)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Replaces the account's role membership with the single named role.
    pub async fn set_role(&self, user_id: Uuid, role: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, id FROM roles WHERE name = $2
            "#,
        )
        .bind(user_id)
        .bind(role)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Deletes an account; role memberships cascade. Returns the number of
    /// affected rows.
    pub async fn delete(&self, id: Uuid) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns whether an account with the given id exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, ApiError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Returns whether a username is taken by an account other than `exclude`.
    pub async fn username_taken(
        &self,
        username: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ApiError> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(username)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(taken)
    }
}
