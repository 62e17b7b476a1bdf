use dioxus::prelude::*;
use railway_admin::{
    api::{tickets::TicketFilter, TicketApi},
    model::ticket::{Ticket, TicketStatus},
    view::{
        format::{format_optional_datetime, format_vnd},
        status::StatusLabel,
        ListState, Pagination,
    },
    ApiClient,
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page, PaginationControl},
    util::{run_action, use_loader},
};

#[component]
pub fn Tickets() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut list = use_signal(ListState::<TicketFilter>::default);
    let tickets = use_loader(
        move || list(),
        |client, state: ListState<TicketFilter>| async move {
            TicketApi::new(&client)
                .list(state.filter(), state.page(), state.size())
                .await
        },
    );

    let mut search = use_signal(String::new);
    let mut detail = use_signal(|| None::<Ticket>);
    let action_error = use_signal(|| None::<String>);

    let open_detail = use_callback(move |id: i64| {
        let client = client.clone();
        run_action(
            async move { TicketApi::new(&client).get(id).await },
            action_error,
            navigator,
            move |ticket| detail.set(Some(ticket)),
        );
    });

    let page = tickets.data.read();
    let pagination = Pagination::from_page(&page);
    let selected_status = list
        .read()
        .filter()
        .status
        .as_ref()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();

    rsx!(
        Page { title: "Quản lý vé",
            div { class: "flex flex-wrap gap-2",
                select {
                    class: "select select-bordered w-48",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| {
                            f.status = (!value.is_empty()).then(|| TicketStatus::from(value));
                        });
                    },
                    option { value: "", selected: selected_status.is_empty(), "Tất cả trạng thái" }
                    for status in TicketStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: status.as_str() == selected_status,
                            {status.label()}
                        }
                    }
                }
                form {
                    class: "join",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let value = search();
                        list.write().update_filter(|f| f.search = value);
                    },
                    input {
                        class: "input input-bordered join-item w-72",
                        placeholder: "Mã vé, tên hành khách, CMND/CCCD",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    button { class: "btn join-item", r#type: "submit", "Tìm" }
                }
            }

            if let Some(message) = tickets.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| tickets.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã vé" }
                            th { "Hành khách" }
                            th { "Chuyến" }
                            th { "Hành trình" }
                            th { "Toa / Ghế" }
                            th { "Khởi hành" }
                            th { class: "numeric", "Giá vé" }
                            th { "Trạng thái" }
                        }
                    }
                    tbody {
                        if *tickets.loading.read() && page.is_empty() {
                            tr {
                                td { colspan: 8, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if page.is_empty() {
                            tr {
                                td { colspan: 8, class: "text-center opacity-70", "Không có vé nào" }
                            }
                        }
                        for ticket in page.content.iter() {
                            tr {
                                key: "{ticket.id}",
                                class: "hover cursor-pointer",
                                onclick: {
                                    let id = ticket.id;
                                    move |_| open_detail.call(id)
                                },
                                td { class: "font-mono", "{ticket.ticket_code}" }
                                td { "{ticket.passenger_name}" }
                                td { {ticket.trip_code.clone().unwrap_or_default()} }
                                td { {journey(ticket)} }
                                td { {seat_label(ticket)} }
                                td { {format_optional_datetime(ticket.departure_time.as_ref())} }
                                td { class: "numeric", {format_vnd(ticket.price)} }
                                td { {status_badge(&ticket.status)} }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                pagination: pagination,
                noun: "vé",
                on_page: move |page| list.write().set_page(page, pagination.total_pages),
                on_size: move |size| list.write().set_size(size),
            }

            if let Some(ticket) = detail() {
                Modal {
                    title: format!("Vé {}", ticket.ticket_code),
                    on_close: move |_| detail.set(None),
                    TicketDetail { ticket: ticket }
                }
            }
        }
    )
}

#[component]
fn TicketDetail(ticket: Ticket) -> Element {
    let rows = [
        ("Mã đặt vé", ticket.booking_code.clone().unwrap_or_default()),
        ("Hành khách", ticket.passenger_name.clone()),
        ("CMND/CCCD", ticket.identity_card.clone().unwrap_or_default()),
        ("Chuyến", ticket.trip_code.clone().unwrap_or_default()),
        ("Hành trình", journey(&ticket)),
        ("Toa / Ghế", seat_label(&ticket)),
        ("Khởi hành", format_optional_datetime(ticket.departure_time.as_ref())),
        ("Giá vé", format_vnd(ticket.price)),
    ];

    rsx!(
        table { class: "table table-sm",
            tbody {
                for (label, value) in rows {
                    tr {
                        th { class: "w-40", "{label}" }
                        td { "{value}" }
                    }
                }
                tr {
                    th { "Trạng thái" }
                    td { {status_badge(&ticket.status)} }
                }
            }
        }
    )
}

fn journey(ticket: &Ticket) -> String {
    match (&ticket.departure_station, &ticket.arrival_station) {
        (Some(from), Some(to)) => format!("{} → {}", from, to),
        (Some(from), None) => from.clone(),
        (None, Some(to)) => to.clone(),
        (None, None) => String::new(),
    }
}

fn seat_label(ticket: &Ticket) -> String {
    format!(
        "{} / {}",
        ticket.carriage_number.as_deref().unwrap_or("-"),
        ticket.seat_number.as_deref().unwrap_or("-")
    )
}
