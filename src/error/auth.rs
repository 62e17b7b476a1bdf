use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No access token is stored, please log in")]
    MissingToken,
    #[error("No refresh token is stored, please log in again")]
    MissingRefreshToken,
    #[error("Failed to refresh access token: {0}")]
    RefreshFailed(String),
    #[error("Session expired, the request was still unauthorized after refreshing the token")]
    SessionExpired,
}
