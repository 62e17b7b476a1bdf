use dioxus::prelude::*;
use dioxus::router::Navigator;
use railway_admin::{api::AuthApi, ApiClient};

use crate::client::router::Route;

/// Ends the session and returns to the login page
///
/// [`AuthApi::logout`] clears the local tokens and logs a failed backend call, the result is
/// not needed here.
pub fn sign_out(client: ApiClient, navigator: Navigator) {
    spawn(async move {
        let _ = AuthApi::new(&client).logout().await;
        navigator.replace(Route::Login {});
    });
}
