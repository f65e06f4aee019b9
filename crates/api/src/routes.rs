pub mod attendance;
pub mod auth;
pub mod health;
pub mod members;
