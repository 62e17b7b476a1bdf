use dioxus::prelude::*;

/// Content area of an admin page with its title row
#[component]
pub fn Page(title: String, actions: Option<Element>, children: Element) -> Element {
    rsx!(
        document::Title { "{title} | Quản trị đường sắt" }
        div {
            class: "flex flex-col gap-4 p-6 w-full max-w-[1440px]",
            div { class: "flex flex-wrap items-center justify-between gap-2",
                h1 { class: "text-2xl font-semibold", "{title}" }
                if let Some(actions) = actions {
                    div { class: "flex gap-2", {actions} }
                }
            }
            {children}
        }
    )
}
