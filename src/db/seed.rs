//! Idempotent startup seeding of roles and the default admin account.

use crate::auth::{ROLE_ADMIN, ROLE_USER, hash_password};
use crate::config::SeedConfig;
use crate::error::ApiError;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Ensures the two fixed roles and the configured admin account exist.
///
/// Safe to run on every process start: each step is guarded by an existence
/// check and an existing user is never overwritten.
///
/// # Errors
/// Returns error if any seeding query fails.
pub async fn run(pool: &PgPool, config: &SeedConfig) -> Result<(), ApiError> {
    ensure_role(pool, ROLE_ADMIN).await?;
    ensure_role(pool, ROLE_USER).await?;
    ensure_admin(pool, config).await?;
    Ok(())
}

/// Inserts a role if it does not already exist.
async fn ensure_role(pool: &PgPool, name: &str) -> Result<(), ApiError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM roles WHERE name = $1)")
        .bind(name)
        .fetch_one(pool)
        .await?;

    if !exists {
        sqlx::query("INSERT INTO roles (name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await?;
        info!("Seeded role: {}", name);
    }

    Ok(())
}

/// Inserts the configured admin account with the Admin role if missing.
async fn ensure_admin(pool: &PgPool, config: &SeedConfig) -> Result<(), ApiError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(&config.admin_username)
            .fetch_one(pool)
            .await?;

    if exists {
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)?;
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, fullname)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(&config.admin_username)
    .bind(&password_hash)
    .bind(&config.admin_fullname)
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO user_roles (user_id, role_id)
        SELECT $1, id FROM roles WHERE name = $2
        "#,
    )
    .bind(id)
    .bind(ROLE_ADMIN)
    .execute(pool)
    .await?;

    info!("Seeded admin account: {}", config.admin_username);

    Ok(())
}
