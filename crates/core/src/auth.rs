//! The fine-grained "holds the commit secret" capability.
//!
//! Distinct from the coarse admin session: a caller that is already logged
//! in still has to present the secret on every lock and unlock.

/// Actor recorded on a DailyStatus when a session is locked.
pub const ADMIN_ACTOR: &str = "admin";

/// Checks a candidate against the configured admin secret.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str) -> bool;
}
