use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Error;

/// Spring-style page envelope returned by every paged list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based index of this page
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Parses a page envelope, rejecting bodies whose `content` is not an array.
    ///
    /// A missing or non-array `content` means the endpoint returned something other than a page,
    /// which is reported as [`Error::MalformedResponse`] rather than a generic JSON error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        match value.get("content") {
            Some(serde_json::Value::Array(_)) => Ok(serde_json::from_value(value)?),
            Some(other) => Err(Error::MalformedResponse(format!(
                "expected `content` to be an array, got {}",
                json_kind(other)
            ))),
            None => Err(Error::MalformedResponse(
                "paged response is missing `content`".to_string(),
            )),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
