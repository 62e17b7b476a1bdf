use serde::{Deserialize, Serialize};

/// Error body returned by the backend
///
/// The backend is not consistent about which field carries the message, so all the known ones
/// are optional and [`ErrorDto::message`] picks the first one present.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: Option<String>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ErrorDto {
    pub fn message(&self) -> Option<&str> {
        [&self.message, &self.error, &self.detail]
            .into_iter()
            .flatten()
            .map(|m| m.trim())
            .find(|m| !m.is_empty())
    }
}
