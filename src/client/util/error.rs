use std::future::Future;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;
use railway_admin::error::{action::UiAction, Error};

use crate::client::router::Route;

/// Apply the view-layer reaction to a failed API call
///
/// Returns the banner message to show, if any. Authentication failures navigate to the login
/// page and superseded requests are dropped silently.
pub fn handle_error(err: &Error, navigator: Navigator) -> Option<String> {
    match err.to_ui_action() {
        UiAction::RedirectToLogin => {
            tracing::warn!("Session is no longer valid: {}", err);
            navigator.replace(Route::Login {});
            None
        }
        UiAction::Banner(message) => {
            tracing::error!("Request failed: {}", err);
            Some(message)
        }
        UiAction::Ignore => None,
    }
}

/// Spawn a mutation and report its failure through `error`
pub fn run_action<T, Fut, S>(
    request: Fut,
    mut error: Signal<Option<String>>,
    navigator: Navigator,
    on_success: S,
) where
    T: 'static,
    Fut: Future<Output = Result<T, Error>> + 'static,
    S: FnOnce(T) + 'static,
{
    spawn(async move {
        match request.await {
            Ok(value) => {
                error.set(None);
                on_success(value);
            }
            Err(err) => {
                if let Some(message) = handle_error(&err, navigator) {
                    error.set(Some(message));
                }
            }
        }
    });
}
