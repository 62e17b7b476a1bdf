use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::{stations::StationFilter, StationApi},
    model::station::{Station, StationPayload, StationStatus},
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

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<i64>,
    payload: StationPayload,
}

fn empty_payload() -> StationPayload {
    StationPayload {
        name: String::new(),
        code: String::new(),
        city: None,
        address: None,
        status: StationStatus::Active,
    }
}

#[component]
pub fn Stations() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut filter = use_signal(StationFilter::default);
    let stations = use_loader(
        move || filter(),
        |client, filter: StationFilter| async move {
            StationApi::new(&client).filtered(&filter).await
        },
    );

    let mut keyword = use_signal(String::new);
    let mut editing = use_signal(|| None::<Editing>);
    let mut deleting = use_signal(|| None::<Station>);
    let action_error = use_signal(|| None::<String>);

    let save = use_callback({
        let client = client.clone();
        move |edited: Editing| {
            let client = client.clone();
            run_action(
                async move {
                    let api = StationApi::new(&client);
                    match edited.id {
                        Some(id) => api.update(id, &edited.payload).await,
                        None => api.create(&edited.payload).await,
                    }
                },
                action_error,
                navigator,
                move |station| {
                    let mut data = stations.data;
                    let applied = upsert_saved(&mut data.write(), station);
                    if !applied {
                        stations.retry();
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
            async move { StationApi::new(&client).delete(id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = stations.data;
                remove_by_id(&mut data.write(), id);
            },
        );
    });

    rsx!(
        Page {
            title: "Quản lý ga",
            actions: rsx!(
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| editing.set(Some(Editing { id: None, payload: empty_payload() })),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Thêm ga"
                }
            ),

            div { class: "flex flex-wrap gap-2",
                form {
                    class: "join",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        filter.write().keyword = keyword();
                    },
                    input {
                        class: "input input-bordered join-item",
                        placeholder: "Tên ga, mã ga, thành phố",
                        value: "{keyword}",
                        oninput: move |e| keyword.set(e.value()),
                    }
                    button { class: "btn join-item", r#type: "submit", "Tìm" }
                }
                select {
                    class: "select select-bordered w-48",
                    onchange: move |e| {
                        let value = e.value();
                        filter.write().status = (!value.is_empty()).then(|| StationStatus::from(value));
                    },
                    option { value: "", "Tất cả trạng thái" }
                    for status in StationStatus::ALL {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
            }

            if let Some(message) = stations.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| stations.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã ga" }
                            th { "Tên ga" }
                            th { "Thành phố" }
                            th { "Địa chỉ" }
                            th { "Trạng thái" }
                            th {}
                        }
                    }
                    tbody {
                        if *stations.loading.read() && stations.data.read().is_empty() {
                            tr {
                                td { colspan: 6, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        }
                        for station in stations.data.read().iter().cloned() {
                            tr { key: "{station.id}",
                                td { class: "font-mono", "{station.code}" }
                                td { "{station.name}" }
                                td { {station.city.clone().unwrap_or_default()} }
                                td { {station.address.clone().unwrap_or_default()} }
                                td { {status_badge(&station.status)} }
                                td { class: "flex gap-1 justify-end",
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: {
                                            let station = station.clone();
                                            move |_| editing.set(Some(Editing {
                                                id: Some(station.id),
                                                payload: StationPayload::from(&station),
                                            }))
                                        },
                                        "Sửa"
                                    }
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let station = station.clone();
                                            move |_| deleting.set(Some(station.clone()))
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
                    title: String::from(if current.id.is_some() { "Sửa thông tin ga" } else { "Thêm ga" }),
                    on_close: move |_| editing.set(None),
                    StationForm {
                        initial: current,
                        on_save: move |edited| save.call(edited),
                        on_cancel: move |_| editing.set(None),
                    }
                }
            }

            if let Some(station) = deleting() {
                Modal {
                    title: "Xóa ga",
                    on_close: move |_| deleting.set(None),
                    p { "Xóa ga {station.name} ({station.code})?" }
                    div { class: "modal-action",
                        button { class: "btn", onclick: move |_| deleting.set(None), "Đóng" }
                        button {
                            class: "btn btn-error",
                            onclick: move |_| delete.call(station.id),
                            "Xóa"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn StationForm(initial: Editing, on_save: EventHandler<Editing>, on_cancel: EventHandler<()>) -> Element {
    let id = initial.id;
    let mut form = use_signal(|| initial.payload.clone());
    let mut invalid = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let payload = form();
        if payload.name.trim().is_empty() || payload.code.trim().is_empty() {
            invalid.set(true);
            return;
        }
        on_save.call(Editing { id, payload });
    };

    let current = form.read();

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            if invalid() {
                p { class: "text-error text-sm", "Tên ga và mã ga là bắt buộc" }
            }
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Mã ga" }
                    input {
                        class: "input input-bordered",
                        value: "{current.code}",
                        oninput: move |e| form.write().code = e.value().to_uppercase(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Tên ga" }
                    input {
                        class: "input input-bordered",
                        value: "{current.name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Thành phố" }
                input {
                    class: "input input-bordered",
                    value: current.city.clone().unwrap_or_default(),
                    oninput: move |e| form.write().city = non_empty(e.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Địa chỉ" }
                input {
                    class: "input input-bordered",
                    value: current.address.clone().unwrap_or_default(),
                    oninput: move |e| form.write().address = non_empty(e.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Trạng thái" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| form.write().status = StationStatus::from(e.value()),
                    for status in StationStatus::ALL {
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
