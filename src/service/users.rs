//! User account operations and credential verification.

use crate::auth::{ROLE_USER, hash_password, verify_password};
use crate::db::UserRow;
use crate::error::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest};
use crate::repository::UserRepository;
use uuid::Uuid;

/// Service for user accounts.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Returns all accounts with their role names.
    pub async fn list(&self) -> Result<Vec<(UserRow, Vec<String>)>, ApiError> {
        let rows = self.repo.find_all().await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let roles = self.repo.roles_for(row.id).await?;
            out.push((row, roles));
        }
        Ok(out)
    }

    /// Returns one account with its role names, or a not-found outcome.
    pub async fn get(&self, id: Uuid) -> Result<(UserRow, Vec<String>), ApiError> {
        let row = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user {}", id)))?;
        let roles = self.repo.roles_for(row.id).await?;
        Ok((row, roles))
    }

    /// Creates an account with a hashed password and the requested role.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<Uuid, ApiError> {
        if self.repo.username_taken(&request.username, None).await? {
            return Err(ApiError::invalid_field(
                "Username",
                "Username is already taken",
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let id = self
            .repo
            .insert(&request.username, &password_hash, &request.fullname)
            .await?;
        self.repo.set_role(id, &request.role).await?;
        Ok(id)
    }

    /// Replaces an account; the target id must exist. The password is only
    /// rehashed when the payload carries one.
    pub async fn update(&self, id: Uuid, request: &UpdateUserRequest) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("user {}", id)));
        }
        if self
            .repo
            .username_taken(&request.username, Some(id))
            .await?
        {
            return Err(ApiError::invalid_field(
                "Username",
                "Username is already taken",
            ));
        }

        let password_hash = match &request.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        self.repo
            .update(id, &request.username, password_hash.as_deref(), &request.fullname)
            .await?;
        self.repo.set_role(id, &request.role).await?;
        Ok(())
    }

    /// Deletes an account; the target id must exist.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.exists(id).await? {
            return Err(ApiError::NotFound(format!("user {}", id)));
        }
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Verifies credentials and returns the account's primary role claim.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller. A user with no role assignments falls back to the default
    /// role sentinel.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserRow, String), ApiError> {
        fn rejected() -> ApiError {
            ApiError::Unauthorized("Invalid credentials".to_string())
        }

        let row = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(rejected)?;

        if !verify_password(password, &row.password_hash) {
            return Err(rejected());
        }

        let roles = self.repo.roles_for(row.id).await?;
        let role = roles.into_iter().next().unwrap_or_else(|| ROLE_USER.to_string());
        Ok((row, role))
    }
}
