use dioxus::prelude::*;
use railway_admin::ApiClient;

use crate::client::{
    components::{ErrorBanner, Page},
    util::{run_action, sign_out},
};

#[component]
pub fn Settings() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut has_access = use_signal(|| client.tokens().access_token().is_some());
    let has_refresh = use_signal(|| client.tokens().refresh_token().is_some());
    let mut refreshed = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    let refresh = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            refreshed.set(false);
            run_action(
                async move { client.refresh_access_token().await },
                error,
                navigator,
                move |_| {
                    has_access.set(true);
                    refreshed.set(true);
                },
            );
        }
    };

    let logout = {
        let client = client.clone();
        move |_| sign_out(client.clone(), navigator)
    };

    rsx!(
        Page { title: "Cài đặt",
            if let Some(message) = error() {
                ErrorBanner { message: message }
            }
            div { class: "card bg-base-100 shadow-sm max-w-2xl",
                div { class: "card-body",
                    h2 { class: "card-title text-base", "Kết nối" }
                    dl { class: "grid grid-cols-3 gap-2",
                        dt { class: "opacity-70", "Địa chỉ API" }
                        dd { class: "col-span-2 font-mono break-all", {client.base_url().to_string()} }
                        dt { class: "opacity-70", "Access token" }
                        dd { class: "col-span-2", {token_state(has_access())} }
                        dt { class: "opacity-70", "Refresh token" }
                        dd { class: "col-span-2", {token_state(has_refresh())} }
                    }
                    if refreshed() {
                        p { class: "text-success text-sm", "Đã làm mới phiên đăng nhập" }
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-sm",
                            disabled: !has_refresh(),
                            onclick: refresh,
                            "Làm mới phiên"
                        }
                        button { class: "btn btn-sm btn-error btn-outline", onclick: logout, "Đăng xuất" }
                    }
                }
            }
        }
    )
}

fn token_state(present: bool) -> Element {
    if present {
        rsx!(span { class: "badge badge-success badge-sm", "Đã lưu" })
    } else {
        rsx!(span { class: "badge badge-ghost badge-sm", "Không có" })
    }
}
