use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::{RouteApi, StationApi},
    model::{
        route::{Route, RoutePayload, RouteStop},
        station::Station,
    },
    view::{
        format::format_duration_minutes,
        optimistic::{remove_by_id, upsert_saved},
    },
    ApiClient,
};

use crate::client::{
    components::{ErrorBanner, Modal, Page},
    util::{non_empty, run_action, use_loader},
};

#[derive(Clone, PartialEq)]
enum Dialog {
    Edit {
        id: Option<i64>,
        payload: RoutePayload,
    },
    Stops {
        route: Route,
        stops: Option<Vec<RouteStop>>,
    },
    Delete(Route),
}

fn empty_payload() -> RoutePayload {
    RoutePayload {
        name: String::new(),
        code: None,
        origin_station_id: 0,
        destination_station_id: 0,
        distance_km: None,
        estimated_duration_minutes: None,
        stops: Vec::new(),
    }
}

#[component]
pub fn TrainRoutes() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let routes = use_loader(
        || (),
        |client, _| async move { RouteApi::new(&client).with_stations().await },
    );
    let stations = use_loader(
        || (),
        |client, _| async move { StationApi::new(&client).list().await },
    );

    let mut dialog = use_signal(|| None::<Dialog>);
    let action_error = use_signal(|| None::<String>);

    let save = use_callback({
        let client = client.clone();
        move |(id, payload): (Option<i64>, RoutePayload)| {
            let client = client.clone();
            run_action(
                async move {
                    let api = RouteApi::new(&client);
                    match id {
                        Some(id) => api.update(id, &payload).await,
                        None => api.create(&payload).await,
                    }
                },
                action_error,
                navigator,
                move |route| {
                    let mut data = routes.data;
                    let applied = upsert_saved(&mut data.write(), route);
                    if !applied {
                        routes.retry();
                    }
                    dialog.set(None);
                },
            );
        }
    });

    let show_stops = use_callback({
        let client = client.clone();
        move |route: Route| {
            let client = client.clone();
            let id = route.id;
            dialog.set(Some(Dialog::Stops { route: route.clone(), stops: None }));
            run_action(
                async move { RouteApi::new(&client).stations(id).await },
                action_error,
                navigator,
                move |stops| {
                    dialog.set(Some(Dialog::Stops { route, stops: Some(stops) }));
                },
            );
        }
    });

    let delete = use_callback(move |id: i64| {
        let client = client.clone();
        dialog.set(None);
        run_action(
            async move { RouteApi::new(&client).delete(id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = routes.data;
                remove_by_id(&mut data.write(), id);
            },
        );
    });

    rsx!(
        Page {
            title: "Quản lý tuyến đường",
            actions: rsx!(
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| dialog.set(Some(Dialog::Edit { id: None, payload: empty_payload() })),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Thêm tuyến"
                }
            ),

            if let Some(message) = routes.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| routes.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã tuyến" }
                            th { "Tên tuyến" }
                            th { "Ga đi → Ga đến" }
                            th { "Các ga dừng" }
                            th { class: "numeric", "Cự ly" }
                            th { "Thời gian" }
                            th {}
                        }
                    }
                    tbody {
                        if *routes.loading.read() && routes.data.read().is_empty() {
                            tr {
                                td { colspan: 7, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        }
                        for route in routes.data.read().iter().cloned() {
                            tr { key: "{route.id}",
                                td { class: "font-mono", {route.code.clone().unwrap_or_default()} }
                                td { "{route.name}" }
                                td { {endpoints(&route, &stations.data.read())} }
                                td { class: "max-w-md",
                                    {route.ordered_stops().iter().map(|s| stop_name(s)).collect::<Vec<_>>().join(" → ")}
                                }
                                td { class: "numeric",
                                    {route.distance_km.map(|km| format!("{:.0} km", km)).unwrap_or_default()}
                                }
                                td { {route.estimated_duration_minutes.map(format_duration_minutes).unwrap_or_default()} }
                                td { class: "flex gap-1 justify-end",
                                    button {
                                        class: "btn btn-xs btn-ghost",
                                        onclick: {
                                            let route = route.clone();
                                            move |_| show_stops.call(route.clone())
                                        },
                                        "Ga dừng"
                                    }
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: {
                                            let route = route.clone();
                                            move |_| dialog.set(Some(Dialog::Edit {
                                                id: Some(route.id),
                                                payload: RoutePayload::from(&route),
                                            }))
                                        },
                                        "Sửa"
                                    }
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let route = route.clone();
                                            move |_| dialog.set(Some(Dialog::Delete(route.clone())))
                                        },
                                        "Xóa"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            {match dialog() {
                Some(Dialog::Edit { id, payload }) => rsx!(
                    Modal {
                        title: String::from(if id.is_some() { "Sửa tuyến đường" } else { "Thêm tuyến đường" }),
                        on_close: move |_| dialog.set(None),
                        RouteForm {
                            initial: payload,
                            stations: stations.data.cloned(),
                            on_save: move |payload| save.call((id, payload)),
                            on_cancel: move |_| dialog.set(None),
                        }
                    }
                ),
                Some(Dialog::Stops { route, stops }) => rsx!(
                    Modal {
                        title: format!("Ga dừng tuyến {}", route.name),
                        on_close: move |_| dialog.set(None),
                        if let Some(stops) = stops {
                            StopTable { stops: stops }
                        } else {
                            span { class: "loading loading-spinner" }
                        }
                    }
                ),
                Some(Dialog::Delete(route)) => rsx!(
                    Modal {
                        title: "Xóa tuyến đường",
                        on_close: move |_| dialog.set(None),
                        p { "Xóa tuyến {route.name}?" }
                        div { class: "modal-action",
                            button { class: "btn", onclick: move |_| dialog.set(None), "Đóng" }
                            button {
                                class: "btn btn-error",
                                onclick: move |_| delete.call(route.id),
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
fn StopTable(stops: Vec<RouteStop>) -> Element {
    rsx!(
        table { class: "table table-sm",
            thead {
                tr {
                    th { "#" }
                    th { "Ga" }
                    th { "Đến (phút)" }
                    th { "Đi (phút)" }
                    th { class: "numeric", "Cự ly" }
                }
            }
            tbody {
                for stop in stops.iter() {
                    tr { key: "{stop.stop_order}",
                        td { "{stop.stop_order}" }
                        td { {stop_name(stop)} }
                        td { {stop.arrival_offset_minutes.map(|m| m.to_string()).unwrap_or_default()} }
                        td { {stop.departure_offset_minutes.map(|m| m.to_string()).unwrap_or_default()} }
                        td { class: "numeric",
                            {stop.distance_from_origin_km.map(|km| format!("{:.0} km", km)).unwrap_or_default()}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn RouteForm(
    initial: RoutePayload,
    stations: Vec<Station>,
    on_save: EventHandler<RoutePayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut invalid = use_signal(|| None::<&'static str>);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let mut payload = form();
        if payload.name.trim().is_empty() {
            invalid.set(Some("Tên tuyến là bắt buộc"));
            return;
        }
        if payload.origin_station_id == 0
            || payload.destination_station_id == 0
            || payload.origin_station_id == payload.destination_station_id
        {
            invalid.set(Some("Ga đi và ga đến phải khác nhau"));
            return;
        }
        for (index, stop) in payload.stops.iter_mut().enumerate() {
            stop.stop_order = index as i32 + 1;
        }
        on_save.call(payload);
    };

    let current = form.read();
    let station_options = stations.clone();

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            if let Some(message) = invalid() {
                p { class: "text-error text-sm", "{message}" }
            }
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Tên tuyến" }
                    input {
                        class: "input input-bordered",
                        value: "{current.name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Mã tuyến" }
                    input {
                        class: "input input-bordered",
                        value: current.code.clone().unwrap_or_default(),
                        oninput: move |e| form.write().code = non_empty(e.value()),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Ga đi" }
                    StationSelect {
                        stations: station_options.clone(),
                        selected: current.origin_station_id,
                        on_change: move |id| form.write().origin_station_id = id,
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Ga đến" }
                    StationSelect {
                        stations: station_options.clone(),
                        selected: current.destination_station_id,
                        on_change: move |id| form.write().destination_station_id = id,
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Cự ly (km)" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "0",
                        value: current.distance_km.map(|d| d.to_string()).unwrap_or_default(),
                        oninput: move |e| form.write().distance_km = e.value().parse().ok(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Thời gian dự kiến (phút)" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "0",
                        value: current.estimated_duration_minutes.map(|d| d.to_string()).unwrap_or_default(),
                        oninput: move |e| form.write().estimated_duration_minutes = e.value().parse().ok(),
                    }
                }
            }
            div { class: "flex flex-col gap-2",
                div { class: "flex items-center justify-between",
                    span { class: "label-text", "Ga dừng theo thứ tự" }
                    button {
                        class: "btn btn-xs",
                        r#type: "button",
                        onclick: move |_| {
                            let mut form = form.write();
                            let order = form.stops.len() as i32 + 1;
                            form.stops.push(RouteStop {
                                station_id: 0,
                                station_name: None,
                                stop_order: order,
                                arrival_offset_minutes: None,
                                departure_offset_minutes: None,
                                distance_from_origin_km: None,
                            });
                        },
                        "Thêm ga dừng"
                    }
                }
                for (index, stop) in current.stops.iter().enumerate() {
                    div { key: "{index}", class: "flex items-center gap-2",
                        span { class: "w-6 text-right", {(index + 1).to_string()} }
                        StationSelect {
                            stations: station_options.clone(),
                            selected: stop.station_id,
                            on_change: move |id| {
                                if let Some(stop) = form.write().stops.get_mut(index) {
                                    stop.station_id = id;
                                };
                            },
                        }
                        input {
                            class: "input input-bordered input-sm w-28",
                            r#type: "number",
                            placeholder: "Phút từ ga đầu",
                            value: stop.arrival_offset_minutes.map(|m| m.to_string()).unwrap_or_default(),
                            oninput: move |e| {
                                if let Some(stop) = form.write().stops.get_mut(index) {
                                    stop.arrival_offset_minutes = e.value().parse().ok();
                                };
                            },
                        }
                        button {
                            class: "btn btn-xs btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                form.write().stops.remove(index);
                            },
                            "✕"
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
fn StationSelect(stations: Vec<Station>, selected: i64, on_change: EventHandler<i64>) -> Element {
    rsx!(
        select {
            class: "select select-bordered select-sm",
            onchange: move |e| on_change.call(e.value().parse().unwrap_or_default()),
            option { value: "0", selected: selected == 0, "Chọn ga" }
            for station in stations {
                option {
                    key: "{station.id}",
                    value: "{station.id}",
                    selected: station.id == selected,
                    "{station.name} ({station.code})"
                }
            }
        }
    )
}

fn stop_name(stop: &RouteStop) -> String {
    stop.station_name
        .clone()
        .unwrap_or_else(|| format!("Ga #{}", stop.station_id))
}

fn endpoints(route: &Route, stations: &[Station]) -> String {
    let name = |name: &Option<String>, id: i64| {
        name.clone()
            .or_else(|| stations.iter().find(|s| s.id == id).map(|s| s.name.clone()))
            .unwrap_or_else(|| format!("#{}", id))
    };

    format!(
        "{} → {}",
        name(&route.origin_station_name, route.origin_station_id),
        name(&route.destination_station_name, route.destination_station_id)
    )
}
