pub mod attendance;
pub mod daily_status;
pub mod member;
pub mod summary;
