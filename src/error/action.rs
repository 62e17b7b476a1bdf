use dioxus_logger::tracing;

use super::{auth::AuthError, Error};

/// What a page should do after an API call fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Credentials are gone or no longer accepted, send the user to the login page
    RedirectToLogin,
    /// Show a banner with the given message and a retry button
    Banner(String),
    /// A newer request replaced this one, nothing to show
    Ignore,
}

impl Error {
    /// Determine how the view layer handles an error
    ///
    /// Only the single 401-triggered refresh inside the client is automatic, everything that
    /// reaches this point is terminal for the user action and needs a manual retry.
    pub fn to_ui_action(&self) -> UiAction {
        match self {
            // Missing or expired credentials - the stored session is unusable
            Self::Auth(
                AuthError::MissingToken
                | AuthError::MissingRefreshToken
                | AuthError::RefreshFailed(_)
                | AuthError::SessionExpired,
            ) => UiAction::RedirectToLogin,

            // Superseded generation - the fresher request owns the state
            Self::Cancelled => UiAction::Ignore,

            // Backend rejected the request, show its message when it gave one
            Self::Api { status, message } => {
                if message.is_empty() {
                    UiAction::Banner(format!("Yêu cầu thất bại (mã lỗi {})", status))
                } else {
                    UiAction::Banner(message.clone())
                }
            }

            Self::MalformedResponse(reason) => {
                tracing::error!("Malformed response: {}", reason);
                UiAction::Banner("Dữ liệu trả về từ máy chủ không hợp lệ".to_string())
            }

            Self::Http(err) if err.is_decode() => {
                UiAction::Banner("Dữ liệu trả về từ máy chủ không hợp lệ".to_string())
            }
            Self::Http(_) => {
                UiAction::Banner("Không thể kết nối tới máy chủ, vui lòng thử lại".to_string())
            }

            Self::Json(_) => {
                UiAction::Banner("Dữ liệu trả về từ máy chủ không hợp lệ".to_string())
            }

            Self::Config(err) => UiAction::Banner(err.to_string()),
        }
    }
}
