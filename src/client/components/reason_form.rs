use dioxus::prelude::*;

use crate::client::util::non_empty;

/// Free-text reason with confirm and cancel buttons
#[component]
pub fn ReasonForm(
    prompt: &'static str,
    confirm: &'static str,
    confirm_class: &'static str,
    #[props(default)] required: bool,
    on_save: EventHandler<Option<String>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut reason = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let value = non_empty(reason());
        if required && value.is_none() {
            invalid.set(true);
            return;
        }
        on_save.call(value);
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            label { class: "form-control",
                span { class: "label-text", "{prompt}" }
                textarea {
                    class: if invalid() { "textarea textarea-bordered textarea-error" } else { "textarea textarea-bordered" },
                    value: "{reason}",
                    oninput: move |e| reason.set(e.value()),
                }
            }
            div { class: "modal-action",
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Đóng" }
                button { class: "btn {confirm_class}", r#type: "submit", "{confirm}" }
            }
        }
    )
}
