//! Password hashing and bearer-token issuance.

use crate::config::AuthConfig;
use crate::error::ApiError;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Scheme label prefixed to issued tokens.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Role granted full administrative access.
pub const ROLE_ADMIN: &str = "Admin";

/// Default role for regular accounts; also the sentinel claim value for a
/// user with no role assignments.
pub const ROLE_USER: &str = "User";

/// Claims embedded in issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Single role claim.
    pub role: String,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch).
    pub exp: usize,
}

/// Hashes a plaintext password for storage.
///
/// # Errors
/// Returns error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// A malformed stored hash is treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Issues and verifies signed bearer tokens (HMAC-SHA256 over the payload).
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenIssuer {
    /// Creates a token issuer from the auth configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: Duration::seconds(config.token_ttl_secs as i64),
        }
    }

    /// Issues a signed token for the given subject and role.
    ///
    /// # Errors
    /// Returns error if signing fails.
    pub fn issue(&self, username: &str, role: &str) -> Result<String, ApiError> {
        self.issue_at(username, role, Utc::now().timestamp())
    }

    /// Issues a token with an explicit issued-at timestamp.
    fn issue_at(&self, username: &str, role: &str, now: i64) -> Result<String, ApiError> {
        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now as usize,
            exp: (now + self.ttl.num_seconds()) as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("token signing failed: {}", e)))
    }

    /// Verifies a token's signature, issuer, audience and expiry.
    ///
    /// # Errors
    /// Returns `ApiError::Unauthorized` for any invalid or expired token.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "desk".to_string(),
            audience: "desk-ui".to_string(),
            token_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = TokenIssuer::new(&test_config());

        let token = issuer.issue("alice", ROLE_USER).expect("should issue");
        let claims = issuer.verify(&token).expect("should verify");

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, ROLE_USER);
        assert_eq!(claims.iss, "desk");
        assert_eq!(claims.aud, "desk-ui");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = TokenIssuer::new(&test_config());

        // Issued two hours in the past with a one hour lifetime.
        let past = Utc::now().timestamp() - 7200;
        let token = issuer.issue_at("alice", ROLE_USER, past).expect("should issue");

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_audience() {
        let issuer = TokenIssuer::new(&test_config());
        let mut other_config = test_config();
        other_config.audience = "someone-else".to_string();
        let other = TokenIssuer::new(&other_config);

        let token = other.issue("alice", ROLE_USER).expect("should issue");

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = TokenIssuer::new(&test_config());
        let mut other_config = test_config();
        other_config.secret = "ffffffffffffffffffffffffffffffff".to_string();
        let other = TokenIssuer::new(&other_config);

        let token = other.issue("alice", ROLE_ADMIN).expect("should issue");

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let issuer = TokenIssuer::new(&test_config());
        let token = issuer.issue("alice", ROLE_USER).expect("should issue");

        let mut tampered = token.clone();
        tampered.pop();

        assert!(issuer.verify(&tampered).is_err());
        assert!(issuer.verify("not-a-token").is_err());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("Secret123!").expect("should hash");

        assert_ne!(hash, "Secret123!");
        assert!(verify_password("Secret123!", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
