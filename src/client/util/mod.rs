pub mod download;
pub mod error;
pub mod loader;
pub mod session;

pub use download::save_file;
pub use error::{handle_error, run_action};
pub use loader::{use_loader, Loader};
pub use session::sign_out;

/// Form value as an optional field, blank input means `None`
pub fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
