mod test_utils;

mod auth_test;
mod health_test;
mod members_test;
mod middleware_test;
