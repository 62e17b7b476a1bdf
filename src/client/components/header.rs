use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use railway_admin::ApiClient;

use crate::client::util::sign_out;

#[component]
pub fn Header() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let logout = move |_| sign_out(client.clone(), navigator);

    rsx! {
        div {
            class: "navbar bg-base-100 border-b border-base-300 px-6",
            div {
                class: "navbar-start",
                p { class: "text-lg", "Bảng điều khiển quản trị" }
            }
            div {
                class: "navbar-end",
                button {
                    class: "btn btn-outline btn-sm flex gap-2",
                    onclick: logout,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Đăng xuất"
                }
            }
        }
    }
}
