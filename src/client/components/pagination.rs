use dioxus::prelude::*;
use railway_admin::view::{pagination::PAGE_SIZE_OPTIONS, Pagination};

/// Page buttons, page size selector and the "Trang x / y" summary under a table
#[component]
pub fn PaginationControl(
    pagination: Pagination,
    noun: &'static str,
    on_page: EventHandler<u32>,
    on_size: EventHandler<u32>,
) -> Element {
    let current = pagination.page;
    let last = pagination.last_page();
    let summary = pagination.summary(noun);

    rsx!(
        div {
            class: "flex flex-wrap items-center justify-between gap-2",
            p { class: "text-sm opacity-70", "{summary}" }
            div { class: "flex items-center gap-2",
                select {
                    class: "select select-sm w-24",
                    value: "{pagination.size}",
                    onchange: move |e| {
                        if let Ok(size) = e.value().parse::<u32>() {
                            on_size.call(size);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option { value: "{size}", selected: size == pagination.size, "{size} / trang" }
                    }
                }
                div { class: "join",
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !pagination.can_previous(),
                        onclick: move |_| on_page.call(0),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !pagination.can_previous(),
                        onclick: move |_| on_page.call(current.saturating_sub(1)),
                        "‹"
                    }
                    for page in pagination.visible_pages() {
                        button {
                            key: "{page}",
                            class: if page == current { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| on_page.call(page),
                            {(page + 1).to_string()}
                        }
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !pagination.can_next(),
                        onclick: move |_| on_page.call(current + 1),
                        "›"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !pagination.can_next(),
                        onclick: move |_| on_page.call(last),
                        "»"
                    }
                }
            }
        }
    )
}
