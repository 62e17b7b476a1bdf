use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrain;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use railway_admin::{api::AuthApi, error::action::UiAction, ApiClient};

use crate::client::{components::ErrorBanner, router::Route};

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        if email.read().trim().is_empty() || password.read().is_empty() {
            error.set(Some("Vui lòng nhập email và mật khẩu".to_string()));
            return;
        }

        let client = client.clone();
        let (email, password) = (email(), password());
        submitting.set(true);
        spawn(async move {
            let result = AuthApi::new(&client).login(&email, &password).await;
            submitting.set(false);

            match result {
                Ok(_) => {
                    error.set(None);
                    navigator.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("Login failed: {}", err);
                    let message = match err.to_ui_action() {
                        UiAction::Banner(message) => message,
                        _ => "Đăng nhập thất bại".to_string(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    rsx!(
        document::Title { "Đăng nhập | Quản trị đường sắt" }
        div { class: "min-h-screen flex items-center justify-center bg-base-200",
            div { class: "card shadow-sm bg-base-100 w-full max-w-sm",
                form {
                    class: "card-body gap-3",
                    onsubmit: onsubmit,
                    div { class: "flex items-center gap-2 mb-2",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaTrain
                        }
                        h2 { class: "card-title", "Đăng nhập quản trị" }
                    }
                    if let Some(message) = error() {
                        ErrorBanner { message: message }
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Email" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Mật khẩu" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Đăng nhập"
                    }
                }
            }
        }
    )
}
