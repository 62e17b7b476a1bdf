use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::TrainApi,
    model::train::{Train, TrainPayload, TrainStatus},
    view::{
        optimistic::{remove_by_id, upsert_saved},
        status::StatusLabel,
    },
    ApiClient,
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page},
    util::{non_empty, run_action, use_loader},
};

/// Train being edited, `None` id for a new one
#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<i64>,
    payload: TrainPayload,
}

fn empty_payload() -> TrainPayload {
    TrainPayload {
        train_number: String::new(),
        name: String::new(),
        train_type: None,
        capacity: 0,
        status: TrainStatus::Active,
    }
}

#[component]
pub fn Trains() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let trains = use_loader(
        || (),
        |client, _| async move { TrainApi::new(&client).list().await },
    );

    let mut editing = use_signal(|| None::<Editing>);
    let mut deleting = use_signal(|| None::<Train>);
    let action_error = use_signal(|| None::<String>);

    let save = use_callback({
        let client = client.clone();
        move |editing_train: Editing| {
            let client = client.clone();
            run_action(
                async move {
                    let api = TrainApi::new(&client);
                    match editing_train.id {
                        Some(id) => api.update(id, &editing_train.payload).await,
                        None => api.create(&editing_train.payload).await,
                    }
                },
                action_error,
                navigator,
                move |train| {
                    let mut data = trains.data;
                    let applied = upsert_saved(&mut data.write(), train);
                    if !applied {
                        trains.retry();
                    }
                    editing.set(None);
                },
            );
        }
    });

    let delete = use_callback(move |id: i64| {
        let client = client.clone();
        deleting.set(None);
        run_action(
            async move { TrainApi::new(&client).delete(id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = trains.data;
                remove_by_id(&mut data.write(), id);
            },
        );
    });

    rsx!(
        Page {
            title: "Quản lý tàu",
            actions: rsx!(
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| editing.set(Some(Editing { id: None, payload: empty_payload() })),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Thêm tàu"
                }
            ),

            if let Some(message) = trains.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| trains.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Số hiệu" }
                            th { "Tên tàu" }
                            th { "Loại" }
                            th { class: "numeric", "Sức chứa" }
                            th { class: "numeric", "Số toa" }
                            th { "Trạng thái" }
                            th {}
                        }
                    }
                    tbody {
                        if *trains.loading.read() && trains.data.read().is_empty() {
                            tr {
                                td { colspan: 7, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        }
                        for train in trains.data.read().iter().cloned() {
                            tr { key: "{train.id}",
                                td { class: "font-mono", "{train.train_number}" }
                                td { "{train.name}" }
                                td { {train.train_type.clone().unwrap_or_default()} }
                                td { class: "numeric", "{train.capacity}" }
                                td { class: "numeric", {train.carriage_count.map(|c| c.to_string()).unwrap_or_default()} }
                                td { {status_badge(&train.status)} }
                                td { class: "flex gap-1 justify-end",
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: {
                                            let train = train.clone();
                                            move |_| editing.set(Some(Editing {
                                                id: Some(train.id),
                                                payload: TrainPayload::from(&train),
                                            }))
                                        },
                                        "Sửa"
                                    }
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let train = train.clone();
                                            move |_| deleting.set(Some(train.clone()))
                                        },
                                        "Xóa"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(current) = editing() {
                Modal {
                    title: String::from(if current.id.is_some() { "Sửa thông tin tàu" } else { "Thêm tàu" }),
                    on_close: move |_| editing.set(None),
                    TrainForm {
                        initial: current,
                        on_save: move |edited| save.call(edited),
                        on_cancel: move |_| editing.set(None),
                    }
                }
            }

            if let Some(train) = deleting() {
                Modal {
                    title: "Xóa tàu",
                    on_close: move |_| deleting.set(None),
                    p { "Xóa tàu {train.train_number} ({train.name})?" }
                    div { class: "modal-action",
                        button { class: "btn", onclick: move |_| deleting.set(None), "Đóng" }
                        button {
                            class: "btn btn-error",
                            onclick: move |_| delete.call(train.id),
                            "Xóa"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TrainForm(initial: Editing, on_save: EventHandler<Editing>, on_cancel: EventHandler<()>) -> Element {
    let id = initial.id;
    let mut form = use_signal(|| initial.payload.clone());
    let mut invalid = use_signal(|| None::<&'static str>);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let payload = form();
        if payload.train_number.trim().is_empty() || payload.name.trim().is_empty() {
            invalid.set(Some("Số hiệu và tên tàu là bắt buộc"));
            return;
        }
        if payload.capacity <= 0 {
            invalid.set(Some("Sức chứa phải lớn hơn 0"));
            return;
        }
        on_save.call(Editing { id, payload });
    };

    let current = form.read();

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            if let Some(message) = invalid() {
                p { class: "text-error text-sm", "{message}" }
            }
            label { class: "form-control",
                span { class: "label-text", "Số hiệu" }
                input {
                    class: "input input-bordered",
                    value: "{current.train_number}",
                    oninput: move |e| form.write().train_number = e.value(),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Tên tàu" }
                input {
                    class: "input input-bordered",
                    value: "{current.name}",
                    oninput: move |e| form.write().name = e.value(),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Loại tàu" }
                input {
                    class: "input input-bordered",
                    value: current.train_type.clone().unwrap_or_default(),
                    oninput: move |e| {
                        form.write().train_type = non_empty(e.value());
                    },
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Sức chứa" }
                input {
                    class: "input input-bordered",
                    r#type: "number",
                    min: "1",
                    value: "{current.capacity}",
                    oninput: move |e| form.write().capacity = e.value().parse().unwrap_or(0),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Trạng thái" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| form.write().status = TrainStatus::from(e.value()),
                    for status in TrainStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: *status == current.status,
                            {status.label()}
                        }
                    }
                }
            }
            div { class: "modal-action",
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Hủy" }
                button { class: "btn btn-primary", r#type: "submit", "Lưu" }
            }
        }
    )
}
