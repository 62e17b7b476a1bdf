//! Administrative console for the railway ticketing platform.
//!
//! The library half of the console holds everything that does not need a browser: the DTO
//! model mirrored from the backend, the authenticated API client, configuration, errors and
//! the view-model logic shared by every admin page. The Dioxus front-end in `main.rs` is a thin
//! layer of components over these modules.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use api::ApiClient;
pub use config::Config;
pub use error::Error;
