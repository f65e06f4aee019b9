/// Admin session and commit-secret checks
pub mod auth;
/// Mapping of domain errors onto HTTP responses
pub mod error_handling;
/// Login token bookkeeping
pub mod session;
