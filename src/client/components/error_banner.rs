use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-error",
            Icon {
                width: 20,
                height: 20,
                icon: FaTriangleExclamation
            }
            span { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "Thử lại"
                }
            }
        }
    )
}
