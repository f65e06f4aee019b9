//! Attendance operations, written against the store traits so any backend
//! can serve them.

pub mod commit;
pub mod ledger;
pub mod register;
pub mod roster;
pub mod summary;
