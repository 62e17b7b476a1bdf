use dioxus::prelude::*;
use railway_admin::{
    api::{bookings::BookingFilter, BookingApi},
    model::booking::{Booking, BookingStatus},
    view::{
        format::{format_optional_datetime, format_vnd},
        optimistic::cancel_booking,
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
pub fn Bookings() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut list = use_signal(ListState::<BookingFilter>::default);
    let bookings = use_loader(
        move || list(),
        |client, state: ListState<BookingFilter>| async move {
            BookingApi::new(&client)
                .list(state.filter(), state.page(), state.size())
                .await
        },
    );

    let mut identity_card = use_signal(String::new);
    let mut confirming = use_signal(|| None::<Booking>);
    let action_error = use_signal(|| None::<String>);

    let cancel = use_callback(move |id: i64| {
        let client = client.clone();
        confirming.set(None);
        run_action(
            async move { BookingApi::new(&client).cancel(id).await },
            action_error,
            navigator,
            move |_| {
                let mut data = bookings.data;
                cancel_booking(&mut data.write().content, id);
            },
        );
    });

    let page = bookings.data.read();
    let pagination = Pagination::from_page(&page);
    let selected_status = list
        .read()
        .filter()
        .booking_status
        .as_ref()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();

    rsx!(
        Page { title: "Quản lý đặt vé",
            div { class: "flex flex-wrap gap-2",
                select {
                    class: "select select-bordered w-48",
                    value: "{selected_status}",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| {
                            f.booking_status = (!value.is_empty()).then(|| BookingStatus::from(value));
                        });
                    },
                    option { value: "", "Tất cả trạng thái" }
                    for status in BookingStatus::ALL {
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
                        let value = identity_card();
                        list.write().update_filter(|f| f.identity_card = value);
                    },
                    input {
                        class: "input input-bordered join-item",
                        placeholder: "Số CMND/CCCD",
                        value: "{identity_card}",
                        oninput: move |e| identity_card.set(e.value()),
                    }
                    button { class: "btn join-item", r#type: "submit", "Tìm" }
                }
            }

            if let Some(message) = bookings.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| bookings.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã đặt vé" }
                            th { "Khách hàng" }
                            th { "CMND/CCCD" }
                            th { "Chuyến" }
                            th { class: "numeric", "Số vé" }
                            th { class: "numeric", "Tổng tiền" }
                            th { "Trạng thái" }
                            th { "Thanh toán" }
                            th { "Ngày đặt" }
                            th {}
                        }
                    }
                    tbody {
                        if *bookings.loading.read() && page.is_empty() {
                            tr {
                                td { colspan: 10, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if page.is_empty() {
                            tr {
                                td { colspan: 10, class: "text-center opacity-70", "Không có đơn đặt vé nào" }
                            }
                        }
                        for booking in page.content.iter().cloned() {
                            tr { key: "{booking.id}",
                                td { class: "font-mono", "{booking.booking_code}" }
                                td {
                                    p { "{booking.customer_name}" }
                                    if let Some(phone) = &booking.phone {
                                        p { class: "text-xs opacity-70", "{phone}" }
                                    }
                                }
                                td { {booking.identity_card.clone().unwrap_or_default()} }
                                td { {booking.trip_code.clone().unwrap_or_default()} }
                                td { class: "numeric", {booking.ticket_count.map(|c| c.to_string()).unwrap_or_default()} }
                                td { class: "numeric", {format_vnd(booking.total_amount)} }
                                td { {status_badge(&booking.status)} }
                                td { {status_badge(&booking.payment_status)} }
                                td { {format_optional_datetime(booking.booking_date.as_ref())} }
                                td {
                                    if booking.is_cancellable() {
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let booking = booking.clone();
                                                move |_| confirming.set(Some(booking.clone()))
                                            },
                                            "Hủy"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                pagination: pagination,
                noun: "đơn đặt vé",
                on_page: move |page| list.write().set_page(page, pagination.total_pages),
                on_size: move |size| list.write().set_size(size),
            }

            if let Some(booking) = confirming() {
                Modal {
                    title: "Hủy đơn đặt vé",
                    on_close: move |_| confirming.set(None),
                    p {
                        "Hủy đơn "
                        span { class: "font-mono", "{booking.booking_code}" }
                        " của {booking.customer_name}? Việc hoàn tiền do hệ thống xử lý."
                    }
                    div { class: "modal-action",
                        button { class: "btn", onclick: move |_| confirming.set(None), "Đóng" }
                        button {
                            class: "btn btn-error",
                            onclick: move |_| cancel.call(booking.id),
                            "Xác nhận hủy"
                        }
                    }
                }
            }
        }
    )
}
