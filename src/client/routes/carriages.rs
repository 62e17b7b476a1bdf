use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::{CarriageApi, TrainApi},
    model::carriage::{
        Carriage, CarriagePayload, CarriageType, Seat, SeatPayload, SeatStatus,
    },
    view::{
        format::format_vnd,
        optimistic::{remove_by_id, upsert_by_id, upsert_saved},
        seats::{capacity_gap, SeatSummary},
        status::{BadgeTone, StatusLabel},
    },
    ApiClient,
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page},
    util::{non_empty, run_action, use_loader},
};

#[derive(Clone, PartialEq)]
enum Dialog {
    Carriage {
        id: Option<i64>,
        payload: CarriagePayload,
    },
    NewSeat(SeatPayload),
    Seat(Seat),
    DeleteCarriage(Carriage),
}

#[component]
pub fn Carriages() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let carriages = use_loader(
        || (),
        |client, _| async move { CarriageApi::new(&client).list_with_seats().await },
    );
    let trains = use_loader(
        || (),
        |client, _| async move { TrainApi::new(&client).list().await },
    );

    let mut train_filter = use_signal(|| None::<i64>);
    let mut dialog = use_signal(|| None::<Dialog>);
    let action_error = use_signal(|| None::<String>);

    let save_carriage = use_callback({
        let client = client.clone();
        move |(id, payload): (Option<i64>, CarriagePayload)| {
            let client = client.clone();
            run_action(
                async move {
                    let api = CarriageApi::new(&client);
                    match id {
                        Some(id) => api.update(id, &payload).await,
                        None => api.create(&payload).await,
                    }
                },
                action_error,
                navigator,
                move |saved: Option<Carriage>| {
                    dialog.set(None);
                    let Some(mut carriage) = saved else {
                        carriages.retry();
                        return;
                    };
                    let mut data = carriages.data;
                    let mut data = data.write();
                    // Updates answer without seats, keep the ones already loaded
                    if let Some(existing) = data.iter().find(|c| c.id == carriage.id) {
                        if carriage.seats.is_empty() {
                            carriage.seats = existing.seats.clone();
                        }
                    }
                    upsert_by_id(&mut data, carriage);
                },
            );
        }
    });

    let delete_carriage = use_callback({
        let client = client.clone();
        move |id: i64| {
            let client = client.clone();
            dialog.set(None);
            run_action(
                async move { CarriageApi::new(&client).delete(id).await },
                action_error,
                navigator,
                move |_| {
                    let mut data = carriages.data;
                    remove_by_id(&mut data.write(), id);
                },
            );
        }
    });

    let save_seat = use_callback({
        let client = client.clone();
        move |(id, payload): (Option<i64>, SeatPayload)| {
            let client = client.clone();
            let carriage_id = payload.carriage_id;
            run_action(
                async move {
                    let api = CarriageApi::new(&client);
                    match id {
                        Some(id) => api.update_seat(id, &payload).await,
                        None => api.create_seat(&payload).await,
                    }
                },
                action_error,
                navigator,
                move |saved: Option<Seat>| {
                    dialog.set(None);
                    let mut data = carriages.data;
                    let mut data = data.write();
                    let applied = data
                        .iter_mut()
                        .find(|c| c.id == carriage_id)
                        .is_some_and(|carriage| upsert_saved(&mut carriage.seats, saved));
                    if !applied {
                        carriages.retry();
                    }
                },
            );
        }
    });

    let delete_seat = use_callback(move |(carriage_id, seat_id): (i64, i64)| {
        let client = client.clone();
        dialog.set(None);
        run_action(
            async move { CarriageApi::new(&client).delete_seat(seat_id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = carriages.data;
                let mut data = data.write();
                if let Some(carriage) = data.iter_mut().find(|c| c.id == carriage_id) {
                    remove_by_id(&mut carriage.seats, seat_id);
                }
            },
        );
    });

    let selected_train = train_filter();
    let visible: Vec<Carriage> = carriages
        .data
        .read()
        .iter()
        .filter(|c| selected_train.is_none_or(|id| c.train_id == id))
        .cloned()
        .collect();
    let totals = SeatSummary::from_carriages(&visible);

    rsx!(
        Page {
            title: "Quản lý toa & ghế",
            actions: rsx!(
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| {
                        let train_id = train_filter()
                            .or_else(|| trains.data.read().first().map(|t| t.id))
                            .unwrap_or_default();
                        dialog.set(Some(Dialog::Carriage {
                            id: None,
                            payload: CarriagePayload {
                                train_id,
                                carriage_number: String::new(),
                                carriage_type: CarriageType::SoftSeat,
                                capacity: 64,
                            },
                        }));
                    },
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Thêm toa"
                }
            ),

            div { class: "flex flex-wrap items-center gap-4",
                select {
                    class: "select select-bordered w-64",
                    onchange: move |e| train_filter.set(e.value().parse().ok()),
                    option { value: "", "Tất cả tàu" }
                    for train in trains.data.read().iter() {
                        option { value: "{train.id}", "{train.train_number} - {train.name}" }
                    }
                }
                SeatTotals { summary: totals }
            }

            if let Some(message) = carriages.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| carriages.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }
            if *carriages.loading.read() && visible.is_empty() {
                span { class: "loading loading-spinner" }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4",
                for carriage in visible {
                    CarriageCard {
                        key: "{carriage.id}",
                        carriage: carriage.clone(),
                        on_edit: move |c: Carriage| dialog.set(Some(Dialog::Carriage {
                            id: Some(c.id),
                            payload: CarriagePayload::from(&c),
                        })),
                        on_delete: move |c: Carriage| dialog.set(Some(Dialog::DeleteCarriage(c))),
                        on_add_seat: move |c: Carriage| dialog.set(Some(Dialog::NewSeat(SeatPayload {
                            carriage_id: c.id,
                            seat_number: (c.seats.len() + 1).to_string(),
                            seat_type: Some(c.carriage_type.as_str().to_string()),
                            status: SeatStatus::Available,
                            price: None,
                        }))),
                        on_seat: move |seat: Seat| dialog.set(Some(Dialog::Seat(seat))),
                    }
                }
            }

            {match dialog() {
                Some(Dialog::Carriage { id, payload }) => rsx!(
                    Modal {
                        title: String::from(if id.is_some() { "Sửa toa" } else { "Thêm toa" }),
                        on_close: move |_| dialog.set(None),
                        CarriageForm {
                            initial: payload,
                            trains: trains.data.read().iter().map(|t| (t.id, t.train_number.clone())).collect::<Vec<_>>(),
                            on_save: move |payload| save_carriage.call((id, payload)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::NewSeat(payload)) => rsx!(
                    Modal {
                        title: "Thêm ghế",
                        on_close: move |_| dialog.set(None),
                        SeatForm {
                            initial: payload,
                            on_save: move |payload| save_seat.call((None, payload)),
                            on_delete: None,
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::Seat(seat)) => rsx!(
                    Modal {
                        title: format!("Ghế {}", seat.seat_number),
                        on_close: move |_| dialog.set(None),
                        SeatForm {
                            initial: SeatPayload {
                                carriage_id: seat.carriage_id.unwrap_or_default(),
                                seat_number: seat.seat_number.clone(),
                                seat_type: seat.seat_type.clone(),
                                status: seat.status.clone(),
                                price: seat.price,
                            },
                            on_save: move |payload| save_seat.call((Some(seat.id), payload)),
                            on_delete: move |payload: SeatPayload| delete_seat.call((payload.carriage_id, seat.id)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::DeleteCarriage(carriage)) => rsx!(
                    Modal {
                        title: "Xóa toa",
                        on_close: move |_| dialog.set(None),
                        p {
                            {format!(
                                "Xóa toa {} cùng toàn bộ {} ghế?",
                                carriage.carriage_number,
                                carriage.seats.len()
                            )}
                        }
                        div { class: "modal-action",
                            button { class: "btn", onclick: move |_| dialog.set(None), "Đóng" }
                            button {
                                class: "btn btn-error",
                                onclick: move |_| delete_carriage.call(carriage.id),
                                "Xóa"
                            }
                        }
                    }
                ),
                None => rsx!(),
            }}
        }
    )
}

#[component]
fn SeatTotals(summary: SeatSummary) -> Element {
    let occupancy = format!("{:.0}%", summary.occupancy() * 100.0);

    rsx!(
        div { class: "stats stats-horizontal shadow-sm",
            div { class: "stat py-2",
                div { class: "stat-title", "Tổng ghế" }
                div { class: "stat-value text-lg", "{summary.total}" }
            }
            div { class: "stat py-2",
                div { class: "stat-title", "Còn trống" }
                div { class: "stat-value text-lg text-success", "{summary.available}" }
            }
            div { class: "stat py-2",
                div { class: "stat-title", "Đã đặt / giữ" }
                div { class: "stat-value text-lg", {(summary.booked + summary.reserved).to_string()} }
            }
            div { class: "stat py-2",
                div { class: "stat-title", "Lấp đầy" }
                div { class: "stat-value text-lg", "{occupancy}" }
            }
        }
    )
}

#[component]
fn CarriageCard(
    carriage: Carriage,
    on_edit: EventHandler<Carriage>,
    on_delete: EventHandler<Carriage>,
    on_add_seat: EventHandler<Carriage>,
    on_seat: EventHandler<Seat>,
) -> Element {
    let summary = SeatSummary::from_seats(&carriage.seats);
    let gap = capacity_gap(&carriage);
    let train = carriage.train_number.clone().unwrap_or_else(|| format!("#{}", carriage.train_id));
    let mut seats = carriage.seats.clone();
    seats.sort_by(|a, b| natural_key(&a.seat_number).cmp(&natural_key(&b.seat_number)));

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body gap-3",
                div { class: "flex items-center justify-between gap-2",
                    div {
                        h2 { class: "card-title", "Toa {carriage.carriage_number}" }
                        p { class: "text-sm opacity-70", "Tàu {train}" }
                    }
                    div { class: "flex items-center gap-2",
                        {status_badge(&carriage.carriage_type)}
                        button {
                            class: "btn btn-xs btn-outline",
                            onclick: {
                                let carriage = carriage.clone();
                                move |_| on_edit.call(carriage.clone())
                            },
                            "Sửa"
                        }
                        button {
                            class: "btn btn-xs btn-error btn-outline",
                            onclick: {
                                let carriage = carriage.clone();
                                move |_| on_delete.call(carriage.clone())
                            },
                            "Xóa"
                        }
                    }
                }
                p { class: "text-sm",
                    "{summary.available} / {summary.total} ghế trống, sức chứa {carriage.capacity}"
                    if gap > 0 {
                        span { class: "text-warning", " (thiếu {gap} ghế)" }
                    }
                }
                div { class: "seat-grid",
                    for seat in seats {
                        button {
                            key: "{seat.id}",
                            class: format!("btn btn-xs {}", seat_class(seat.status.badge().tone)),
                            title: seat.status.label(),
                            onclick: {
                                let seat = seat.clone();
                                move |_| on_seat.call(seat.clone())
                            },
                            "{seat.seat_number}"
                        }
                    }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: {
                            let carriage = carriage.clone();
                            move |_| on_add_seat.call(carriage.clone())
                        },
                        "+"
                    }
                }
            }
        }
    )
}

#[component]
fn CarriageForm(
    initial: CarriagePayload,
    trains: Vec<(i64, String)>,
    on_save: EventHandler<CarriagePayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut invalid = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let payload = form();
        if payload.carriage_number.trim().is_empty() || payload.capacity <= 0 || payload.train_id == 0 {
            invalid.set(true);
            return;
        }
        on_save.call(payload);
    };

    let current = form.read();

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            if invalid() {
                p { class: "text-error text-sm", "Cần chọn tàu, nhập số toa và sức chứa lớn hơn 0" }
            }
            label { class: "form-control",
                span { class: "label-text", "Tàu" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| form.write().train_id = e.value().parse().unwrap_or_default(),
                    for (id, number) in trains {
                        option { value: "{id}", selected: id == current.train_id, "{number}" }
                    }
                }
            }
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Số toa" }
                    input {
                        class: "input input-bordered",
                        value: "{current.carriage_number}",
                        oninput: move |e| form.write().carriage_number = e.value(),
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
            }
            label { class: "form-control",
                span { class: "label-text", "Loại toa" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| form.write().carriage_type = CarriageType::from(e.value()),
                    for kind in CarriageType::ALL {
                        option {
                            value: kind.as_str(),
                            selected: *kind == current.carriage_type,
                            {kind.label()}
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

#[component]
fn SeatForm(
    initial: SeatPayload,
    on_save: EventHandler<SeatPayload>,
    on_delete: Option<EventHandler<SeatPayload>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let payload = form();
        if !payload.seat_number.trim().is_empty() {
            on_save.call(payload);
        }
    };

    let current = form.read();
    let price = current.price.map(format_vnd).unwrap_or_else(|| "Theo giá chuyến".to_string());

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Số ghế" }
                    input {
                        class: "input input-bordered",
                        value: "{current.seat_number}",
                        oninput: move |e| form.write().seat_number = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Loại ghế" }
                    input {
                        class: "input input-bordered",
                        value: current.seat_type.clone().unwrap_or_default(),
                        oninput: move |e| form.write().seat_type = non_empty(e.value()),
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Giá vé ({price})" }
                input {
                    class: "input input-bordered",
                    r#type: "number",
                    min: "0",
                    value: current.price.map(|p| p.to_string()).unwrap_or_default(),
                    oninput: move |e| form.write().price = e.value().parse().ok(),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Trạng thái" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| form.write().status = SeatStatus::from(e.value()),
                    for status in SeatStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: *status == current.status,
                            {status.label()}
                        }
                    }
                }
            }
            div { class: "modal-action",
                if let Some(on_delete) = on_delete {
                    button {
                        class: "btn btn-error btn-outline mr-auto",
                        r#type: "button",
                        onclick: move |_| on_delete.call(form()),
                        "Xóa ghế"
                    }
                }
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Hủy" }
                button { class: "btn btn-primary", r#type: "submit", "Lưu" }
            }
        }
    )
}

fn seat_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "btn-success btn-outline",
        BadgeTone::Warning => "btn-warning",
        BadgeTone::Error => "btn-error",
        BadgeTone::Info => "btn-info",
        BadgeTone::Neutral => "btn-disabled",
    }
}

/// Sorts "2" before "10" while keeping seat numbers like "12A" together
fn natural_key(seat_number: &str) -> (u32, String) {
    let digits: String = seat_number.chars().take_while(char::is_ascii_digit).collect();
    (digits.parse().unwrap_or(u32::MAX), seat_number.to_string())
}
