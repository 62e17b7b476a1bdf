//! Credentials used across tests. None of them are real.

/// Access token stored before the test starts
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Refresh token stored before the test starts
pub static TEST_REFRESH_TOKEN: &str = "test-refresh-token";

/// Access token handed out by the mock `POST /auth/refresh`
pub static TEST_REFRESHED_TOKEN: &str = "test-refreshed-access-token";

pub static TEST_EMAIL: &str = "admin@example.vn";
pub static TEST_PASSWORD: &str = "mat-khau-thu";
