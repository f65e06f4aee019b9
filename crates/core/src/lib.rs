//! # Rollcall core
//!
//! Domain types and operations for daily attendance: a per-date lock ledger,
//! a per-member presence register, the commit/unlock protocol and the daily
//! summary. Storage is abstracted behind the traits in [`store`].

pub mod auth;
pub mod date;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
