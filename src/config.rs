//! Backend location for the console.
//!
//! On the web the variables are resolved at compile time (a browser has no process
//! environment), on native targets they are read when [`Config::from_env`] runs.

use crate::error::config::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Checked in order, the first non-empty one wins
pub const API_URL_VARS: [&str; 2] = ["API_URL", "API_BASE_URL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST backend without a trailing slash
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(read_var)
    }

    /// Builds the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let found = API_URL_VARS.iter().find_map(|var| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (*var, value))
        });

        let Some((var, value)) = found else {
            return Ok(Self::default());
        };

        let api_base_url = value.trim().trim_end_matches('/').to_string();

        let url = reqwest::Url::parse(&api_base_url).map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self { api_base_url })
    }
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    match name {
        "API_URL" => option_env!("API_URL"),
        "API_BASE_URL" => option_env!("API_BASE_URL"),
        _ => None,
    }
    .map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
