use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::{trips::TripFilter, RouteApi, TrainApi, TripApi},
    model::trip::{Trip, TripDelayRequest, TripPayload, TripStatus},
    view::{
        format::{datetime_input_value, format_datetime, format_vnd, parse_datetime_input},
        optimistic::{remove_by_id, upsert_saved},
        status::StatusLabel,
        ListState, Pagination,
    },
    ApiClient,
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page, PaginationControl, ReasonForm},
    util::{non_empty, run_action, use_loader},
};

const SORT_OPTIONS: [(&str, &str); 4] = [
    ("departureTime,asc", "Khởi hành sớm nhất"),
    ("departureTime,desc", "Khởi hành muộn nhất"),
    ("arrivalTime,asc", "Đến sớm nhất"),
    ("id,desc", "Mới tạo"),
];

#[derive(Clone, PartialEq)]
enum Dialog {
    Edit { id: Option<i64>, initial: Option<Trip> },
    Delay(Trip),
    Cancel(Trip),
    Delete(Trip),
}

#[component]
pub fn Trips() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut list = use_signal(ListState::<TripFilter>::default);
    let trips = use_loader(
        move || list(),
        |client, state: ListState<TripFilter>| async move {
            TripApi::new(&client)
                .search(state.filter(), state.page(), state.size())
                .await
        },
    );

    let mut search = use_signal(String::new);
    let mut dialog = use_signal(|| None::<Dialog>);
    let action_error = use_signal(|| None::<String>);

    let apply = move |trip: Option<Trip>| {
        let mut data = trips.data;
        let applied = upsert_saved(&mut data.write().content, trip);
        if !applied {
            trips.retry();
        }
        dialog.set(None);
    };

    let save = use_callback({
        let client = client.clone();
        move |(id, payload): (Option<i64>, TripPayload)| {
            let client = client.clone();
            run_action(
                async move {
                    let api = TripApi::new(&client);
                    match id {
                        Some(id) => api.update(id, &payload).await,
                        None => api.create(&payload).await,
                    }
                },
                action_error,
                navigator,
                apply,
            );
        }
    });

    let change_status = use_callback({
        let client = client.clone();
        move |(id, status): (i64, TripStatus)| {
            let client = client.clone();
            run_action(
                async move { TripApi::new(&client).update_status(id, status).await },
                action_error,
                navigator,
                apply,
            );
        }
    });

    let delay = use_callback({
        let client = client.clone();
        move |(id, request): (i64, TripDelayRequest)| {
            let client = client.clone();
            run_action(
                async move { TripApi::new(&client).delay(id, &request).await },
                action_error,
                navigator,
                apply,
            );
        }
    });

    let cancel = use_callback({
        let client = client.clone();
        move |(id, reason): (i64, Option<String>)| {
            let client = client.clone();
            run_action(
                async move { TripApi::new(&client).cancel(id, reason).await },
                action_error,
                navigator,
                apply,
            );
        }
    });

    let delete = use_callback(move |id: i64| {
        let client = client.clone();
        dialog.set(None);
        run_action(
            async move { TripApi::new(&client).delete(id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = trips.data;
                remove_by_id(&mut data.write().content, id);
            },
        );
    });

    let page = trips.data.read();
    let pagination = Pagination::from_page(&page);

    rsx!(
        Page {
            title: "Quản lý chuyến tàu",
            actions: rsx!(
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| dialog.set(Some(Dialog::Edit { id: None, initial: None })),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Thêm chuyến"
                }
            ),

            div { class: "flex flex-wrap gap-2",
                form {
                    class: "join",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let value = search();
                        list.write().update_filter(|f| f.search = value);
                    },
                    input {
                        class: "input input-bordered join-item w-64",
                        placeholder: "Mã chuyến, số hiệu tàu, tuyến",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    button { class: "btn join-item", r#type: "submit", "Tìm" }
                }
                select {
                    class: "select select-bordered w-48",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| {
                            f.status = (!value.is_empty()).then(|| TripStatus::from(value));
                        });
                    },
                    option { value: "", "Tất cả trạng thái" }
                    for status in TripStatus::ALL {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
                select {
                    class: "select select-bordered w-56",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| f.sort = Some(value));
                    },
                    for (value, label) in SORT_OPTIONS {
                        option { value: value, "{label}" }
                    }
                }
            }

            if let Some(message) = trips.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| trips.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã chuyến" }
                            th { "Tàu" }
                            th { "Tuyến" }
                            th { "Khởi hành" }
                            th { "Đến nơi" }
                            th { class: "numeric", "Giá cơ bản" }
                            th { class: "numeric", "Ghế trống" }
                            th { "Trạng thái" }
                            th {}
                        }
                    }
                    tbody {
                        if *trips.loading.read() && page.is_empty() {
                            tr {
                                td { colspan: 9, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if page.is_empty() {
                            tr {
                                td { colspan: 9, class: "text-center opacity-70", "Không có chuyến tàu nào" }
                            }
                        }
                        for trip in page.content.iter().cloned() {
                            tr { key: "{trip.id}",
                                td { class: "font-mono", {trip.trip_code.clone().unwrap_or_else(|| format!("#{}", trip.id))} }
                                td { {trip.train_number.clone().unwrap_or_default()} }
                                td { {trip.route_name.clone().unwrap_or_default()} }
                                td {
                                    p { {format_datetime(&trip.departure_time)} }
                                    if trip.delay_minutes > 0 {
                                        p { class: "text-xs text-warning", "Trễ {trip.delay_minutes} phút" }
                                    }
                                }
                                td { {format_datetime(&trip.arrival_time)} }
                                td { class: "numeric", {trip.base_price.map(format_vnd).unwrap_or_default()} }
                                td { class: "numeric", {trip.available_seats.map(|s| s.to_string()).unwrap_or_default()} }
                                td { {status_badge(&trip.status)} }
                                td {
                                    TripActions {
                                        trip: trip.clone(),
                                        on_dialog: move |d| dialog.set(Some(d)),
                                        on_status: move |args| change_status.call(args),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                pagination: pagination,
                noun: "chuyến",
                on_page: move |page| list.write().set_page(page, pagination.total_pages),
                on_size: move |size| list.write().set_size(size),
            }

            {match dialog() {
                Some(Dialog::Edit { id, initial }) => rsx!(
                    Modal {
                        title: String::from(if id.is_some() { "Sửa chuyến tàu" } else { "Thêm chuyến tàu" }),
                        on_close: move |_| dialog.set(None),
                        TripForm {
                            initial: initial,
                            on_save: move |payload| save.call((id, payload)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::Delay(trip)) => rsx!(
                    Modal {
                        title: "Báo trễ chuyến",
                        on_close: move |_| dialog.set(None),
                        DelayForm {
                            trip: trip.clone(),
                            on_save: move |request| delay.call((trip.id, request)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::Cancel(trip)) => rsx!(
                    Modal {
                        title: "Hủy chuyến",
                        on_close: move |_| dialog.set(None),
                        ReasonForm {
                            prompt: "Lý do hủy chuyến (hành khách sẽ được thông báo)",
                            confirm: "Xác nhận hủy",
                            confirm_class: "btn-error",
                            on_save: move |reason| cancel.call((trip.id, reason)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::Delete(trip)) => rsx!(
                    Modal {
                        title: "Xóa chuyến",
                        on_close: move |_| dialog.set(None),
                        p { {format!("Xóa chuyến tàu khởi hành {}?", format_datetime(&trip.departure_time))} }
                        div { class: "modal-action",
                            button { class: "btn", onclick: move |_| dialog.set(None), "Đóng" }
                            button {
                                class: "btn btn-error",
                                onclick: move |_| delete.call(trip.id),
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
fn TripActions(
    trip: Trip,
    on_dialog: EventHandler<Dialog>,
    on_status: EventHandler<(i64, TripStatus)>,
) -> Element {
    let id = trip.id;
    let open = matches!(trip.status, TripStatus::Scheduled | TripStatus::Delayed);

    rsx!(
        div { class: "dropdown dropdown-end",
            div { tabindex: "0", role: "button", class: "btn btn-xs btn-ghost", "Thao tác" }
            ul { tabindex: "0", class: "dropdown-content menu bg-base-100 rounded-box z-10 w-44 shadow-sm",
                li {
                    a {
                        onclick: {
                            let trip = trip.clone();
                            move |_| on_dialog.call(Dialog::Edit { id: Some(id), initial: Some(trip.clone()) })
                        },
                        "Sửa"
                    }
                }
                if open {
                    li {
                        a {
                            onclick: {
                                let trip = trip.clone();
                                move |_| on_dialog.call(Dialog::Delay(trip.clone()))
                            },
                            "Báo trễ"
                        }
                    }
                    li {
                        a {
                            onclick: {
                                let trip = trip.clone();
                                move |_| on_dialog.call(Dialog::Cancel(trip.clone()))
                            },
                            "Hủy chuyến"
                        }
                    }
                    li {
                        a {
                            onclick: move |_| on_status.call((id, TripStatus::Completed)),
                            "Đánh dấu hoàn thành"
                        }
                    }
                }
                if trip.status == TripStatus::Delayed {
                    li {
                        a {
                            onclick: move |_| on_status.call((id, TripStatus::Scheduled)),
                            "Đúng giờ trở lại"
                        }
                    }
                }
                li {
                    a {
                        class: "text-error",
                        onclick: {
                            let trip = trip.clone();
                            move |_| on_dialog.call(Dialog::Delete(trip.clone()))
                        },
                        "Xóa"
                    }
                }
            }
        }
    )
}

#[component]
fn TripForm(
    #[props(!optional)] initial: Option<Trip>,
    on_save: EventHandler<TripPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let trains = use_loader(
        || (),
        |client, _| async move { TrainApi::new(&client).active().await },
    );
    let routes = use_loader(
        || (),
        |client, _| async move { RouteApi::new(&client).list().await },
    );

    let mut train_id = use_signal(|| initial.as_ref().map(|t| t.train_id).unwrap_or_default());
    let mut route_id = use_signal(|| initial.as_ref().map(|t| t.route_id).unwrap_or_default());
    let mut departure = use_signal(|| {
        initial
            .as_ref()
            .map(|t| datetime_input_value(&t.departure_time))
            .unwrap_or_default()
    });
    let mut arrival = use_signal(|| {
        initial
            .as_ref()
            .map(|t| datetime_input_value(&t.arrival_time))
            .unwrap_or_default()
    });
    let mut base_price = use_signal(|| {
        initial
            .as_ref()
            .and_then(|t| t.base_price)
            .map(|p| p.to_string())
            .unwrap_or_default()
    });
    let status = initial.as_ref().map(|t| t.status.clone());
    let mut invalid = use_signal(|| None::<&'static str>);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let (Some(departure_time), Some(arrival_time)) =
            (parse_datetime_input(&departure()), parse_datetime_input(&arrival()))
        else {
            invalid.set(Some("Vui lòng nhập thời gian khởi hành và đến nơi"));
            return;
        };
        if arrival_time <= departure_time {
            invalid.set(Some("Thời gian đến phải sau thời gian khởi hành"));
            return;
        }
        if train_id() == 0 || route_id() == 0 {
            invalid.set(Some("Vui lòng chọn tàu và tuyến đường"));
            return;
        }

        on_save.call(TripPayload {
            train_id: train_id(),
            route_id: route_id(),
            departure_time,
            arrival_time,
            base_price: base_price().trim().parse().ok(),
            status: status.clone(),
        });
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            if let Some(message) = invalid() {
                p { class: "text-error text-sm", "{message}" }
            }
            if let Some(message) = trains.error.cloned().or(routes.error.cloned()) {
                ErrorBanner { message: message }
            }
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Tàu" }
                    select {
                        class: "select select-bordered",
                        onchange: move |e| train_id.set(e.value().parse().unwrap_or_default()),
                        option { value: "0", "Chọn tàu" }
                        for train in trains.data.read().iter() {
                            option {
                                value: "{train.id}",
                                selected: train.id == train_id(),
                                "{train.train_number} - {train.name}"
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Tuyến đường" }
                    select {
                        class: "select select-bordered",
                        onchange: move |e| route_id.set(e.value().parse().unwrap_or_default()),
                        option { value: "0", "Chọn tuyến" }
                        for route in routes.data.read().iter() {
                            option {
                                value: "{route.id}",
                                selected: route.id == route_id(),
                                "{route.name}"
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Khởi hành" }
                    input {
                        class: "input input-bordered",
                        r#type: "datetime-local",
                        value: "{departure}",
                        oninput: move |e| departure.set(e.value()),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Đến nơi" }
                    input {
                        class: "input input-bordered",
                        r#type: "datetime-local",
                        value: "{arrival}",
                        oninput: move |e| arrival.set(e.value()),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Giá cơ bản (₫)" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "0",
                        value: "{base_price}",
                        oninput: move |e| base_price.set(e.value()),
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
fn DelayForm(
    trip: Trip,
    on_save: EventHandler<TripDelayRequest>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut minutes = use_signal(|| trip.delay_minutes.max(0).to_string());
    let mut reason = use_signal(|| trip.delay_reason.clone().unwrap_or_default());
    let mut invalid = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        match minutes().trim().parse::<i32>() {
            Ok(delay_minutes) if delay_minutes > 0 => on_save.call(TripDelayRequest {
                delay_minutes,
                reason: non_empty(reason()),
            }),
            _ => invalid.set(true),
        }
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            p { {format!("Khởi hành dự kiến {}", format_datetime(&trip.departure_time))} }
            if invalid() {
                p { class: "text-error text-sm", "Số phút trễ phải lớn hơn 0" }
            }
            label { class: "form-control",
                span { class: "label-text", "Số phút trễ" }
                input {
                    class: "input input-bordered",
                    r#type: "number",
                    min: "1",
                    value: "{minutes}",
                    oninput: move |e| minutes.set(e.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Lý do" }
                textarea {
                    class: "textarea textarea-bordered",
                    value: "{reason}",
                    oninput: move |e| reason.set(e.value()),
                }
            }
            div { class: "modal-action",
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Đóng" }
                button { class: "btn btn-warning", r#type: "submit", "Báo trễ" }
            }
        }
    )
}
