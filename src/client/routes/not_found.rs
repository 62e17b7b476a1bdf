use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        document::Title { "Không tìm thấy trang" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "404" }
            p { "Không tìm thấy trang /{path}" }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Về trang tổng quan" }
        }
    )
}
