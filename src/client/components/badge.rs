use dioxus::prelude::*;
use railway_admin::view::status::StatusLabel;

#[component]
pub fn Badge(label: String, class: &'static str) -> Element {
    rsx!(
        span { class: "badge badge-sm whitespace-nowrap {class}", "{label}" }
    )
}

/// Badge element for any status with a label
pub fn status_badge(status: &impl StatusLabel) -> Element {
    let badge = status.badge();

    rsx!(Badge {
        label: badge.label,
        class: badge.tone.class()
    })
}
