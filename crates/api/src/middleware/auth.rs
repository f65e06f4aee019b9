//! # Authentication Module
//!
//! Two separate checks guard the API:
//!
//! - **Admin session**: a bearer token handed out by `/api/auth/login` and
//!   required by every member and attendance route ([`require_admin`]).
//! - **Commit secret**: the admin password itself, re-presented on every
//!   lock/unlock and checked through [`AdminSecret`].
//!
//! Hashed secrets use Argon2 in PHC string format; plaintext secrets are
//! compared in constant time.

use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use eyre::{Result, eyre};
use rollcall_core::{auth::CredentialVerifier, errors::AttendanceError};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::{ApiState, middleware::error_handling::AppError};

/// Hashes a password using the Argon2 algorithm
///
/// Produces the PHC string expected in `ADMIN_PASSWORD_HASH`.
///
/// # Example
///
/// ```rust
/// use rollcall_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("correct horse").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
///
/// # Security Notes
///
/// - Uses a random salt for each password
/// - Uses default Argon2 parameters
/// - Returns password in PHC string format (includes algorithm, version, parameters, salt, and hash)
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// The configured admin secret, resolved once at startup.
#[derive(Clone)]
pub enum AdminSecret {
    /// Argon2 PHC string
    Argon2(String),
    Plaintext(String),
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminSecret::Argon2(_) => f.write_str("AdminSecret::Argon2(..)"),
            AdminSecret::Plaintext(_) => f.write_str("AdminSecret::Plaintext(..)"),
        }
    }
}

impl AdminSecret {
    /// Chooses the strategy: a hash wins over a plaintext secret, neither
    /// means the server has no admin secret at all.
    ///
    /// # Errors
    ///
    /// Fails when the hash is not a valid PHC string.
    pub fn resolve(hash: Option<&str>, plaintext: Option<&str>) -> Result<Option<Self>> {
        if let Some(hash) = hash.map(str::trim).filter(|h| !h.is_empty()) {
            PasswordHash::new(hash).map_err(|e| eyre!("Invalid ADMIN_PASSWORD_HASH: {}", e))?;
            return Ok(Some(AdminSecret::Argon2(hash.to_string())));
        }

        Ok(plaintext
            .filter(|p| !p.is_empty())
            .map(|p| AdminSecret::Plaintext(p.to_string())))
    }
}

impl AdminSecret {
    /// Checks `candidate` exactly as given, without trimming. Used by login.
    pub fn verify_exact(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        match self {
            AdminSecret::Argon2(hash) => match PasswordHash::new(hash) {
                Ok(parsed) => Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    warn!("stored admin hash no longer parses: {}", e);
                    false
                }
            },
            AdminSecret::Plaintext(secret) => {
                bool::from(candidate.as_bytes().ct_eq(secret.as_bytes()))
            }
        }
    }
}

/// The commit check trims the presented password first.
impl CredentialVerifier for AdminSecret {
    fn verify(&self, candidate: &str) -> bool {
        self.verify_exact(candidate.trim())
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Rejects requests without a live admin session.
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .map(str::to_string)
        .ok_or_else(|| AttendanceError::Authentication("Not authenticated".to_string()))?;

    if !state.sessions.validate(&token).await {
        return Err(AppError(AttendanceError::Authentication(
            "Invalid or expired token".to_string(),
        )));
    }

    Ok(next.run(request).await)
}
