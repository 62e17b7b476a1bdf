use dioxus::prelude::*;
use railway_admin::ApiClient;

use crate::client::{
    components::{Header, Sidebar},
    router::Route,
};

/// Shell of every authenticated page, sends visitors without a session to the login page
#[component]
pub fn AdminLayout() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let authenticated = client.tokens().is_authenticated();

    use_effect(move || {
        if !authenticated {
            navigator.replace(Route::Login {});
        }
    });

    if !authenticated {
        return rsx!();
    }

    rsx! {
        div {
            class: "flex min-h-screen",
            Sidebar {}
            div {
                class: "flex flex-col flex-1 min-w-0",
                Header {}
                main {
                    class: "flex justify-center",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
