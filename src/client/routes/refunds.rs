use dioxus::prelude::*;
use railway_admin::{
    api::RefundApi,
    model::refund::{RefundRequest, RefundStatus},
    view::{
        format::{format_optional_datetime, format_vnd},
        optimistic::upsert_by_id,
        status::StatusLabel,
    },
    ApiClient,
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page, ReasonForm},
    util::{run_action, use_loader},
};

#[derive(Clone, PartialEq)]
enum Decision {
    Approve(RefundRequest),
    Reject(RefundRequest),
}

#[component]
pub fn Refunds() -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut status = use_signal(|| Some(RefundStatus::Pending));
    let refunds = use_loader(
        move || status(),
        |client, status: Option<RefundStatus>| async move {
            RefundApi::new(&client).list(status.as_ref()).await
        },
    );

    let mut deciding = use_signal(|| None::<Decision>);
    let action_error = use_signal(|| None::<String>);

    let apply = move |saved: Option<RefundRequest>| {
        deciding.set(None);
        let Some(refund) = saved else {
            refunds.retry();
            return;
        };
        let mut data = refunds.data;
        let mut data = data.write();
        // Drop rows that no longer match the status filter
        if status().is_some_and(|s| s != refund.status) {
            data.retain(|r| r.id != refund.id);
        } else {
            upsert_by_id(&mut data, refund);
        }
    };

    let approve = use_callback({
        let client = client.clone();
        move |(id, note): (i64, Option<String>)| {
            let client = client.clone();
            run_action(
                async move { RefundApi::new(&client).approve(id, note).await },
                action_error,
                navigator,
                apply,
            );
        }
    });

    let reject = use_callback(move |(id, reason): (i64, String)| {
        let client = client.clone();
        run_action(
            async move { RefundApi::new(&client).reject(id, &reason).await },
            action_error,
            navigator,
            apply,
        );
    });

    let selected = status.read().as_ref().map(|s| s.as_str().to_string()).unwrap_or_default();
    let items = refunds.data.read();
    let total: f64 = items.iter().map(RefundRequest::display_amount).sum();

    rsx!(
        Page { title: "Yêu cầu hoàn tiền",
            div { class: "flex flex-wrap items-center gap-4",
                select {
                    class: "select select-bordered w-48",
                    onchange: move |e| {
                        let value = e.value();
                        status.set((!value.is_empty()).then(|| RefundStatus::from(value)));
                    },
                    option { value: "", selected: selected.is_empty(), "Tất cả trạng thái" }
                    for option_status in RefundStatus::ALL {
                        option {
                            value: option_status.as_str(),
                            selected: option_status.as_str() == selected,
                            {option_status.label()}
                        }
                    }
                }
                span { class: "text-sm opacity-70",
                    {format!("{} yêu cầu, tổng hoàn {}", items.len(), format_vnd(total))}
                }
            }

            if let Some(message) = refunds.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| refunds.retry() }
            }
            if let Some(message) = action_error.cloned() {
                ErrorBanner { message: message }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Mã vé" }
                            th { "Khách hàng" }
                            th { class: "numeric", "Giá vé" }
                            th { class: "numeric", "Tỷ lệ" }
                            th { class: "numeric", "Số tiền hoàn" }
                            th { "Lý do" }
                            th { "Ngày yêu cầu" }
                            th { "Trạng thái" }
                            th {}
                        }
                    }
                    tbody {
                        if *refunds.loading.read() && items.is_empty() {
                            tr {
                                td { colspan: 9, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if items.is_empty() {
                            tr {
                                td { colspan: 9, class: "text-center opacity-70", "Không có yêu cầu hoàn tiền nào" }
                            }
                        }
                        for refund in items.iter().cloned() {
                            tr { key: "{refund.id}",
                                td { class: "font-mono",
                                    p { {refund.ticket_code.clone().unwrap_or_default()} }
                                    if let Some(booking) = &refund.booking_code {
                                        p { class: "text-xs opacity-70", "{booking}" }
                                    }
                                }
                                td { {refund.customer_name.clone().unwrap_or_default()} }
                                td { class: "numeric", {format_vnd(refund.original_amount)} }
                                td { class: "numeric", "{refund.refund_percentage}%" }
                                td { class: "numeric font-semibold", {format_vnd(refund.display_amount())} }
                                td { class: "max-w-xs",
                                    p { {refund.reason.clone().unwrap_or_default()} }
                                    if let Some(note) = &refund.admin_note {
                                        p { class: "text-xs opacity-70", "Ghi chú: {note}" }
                                    }
                                }
                                td { {format_optional_datetime(refund.requested_at.as_ref())} }
                                td { {status_badge(&refund.status)} }
                                td {
                                    if refund.is_pending() {
                                        div { class: "flex gap-1",
                                            button {
                                                class: "btn btn-xs btn-success",
                                                onclick: {
                                                    let refund = refund.clone();
                                                    move |_| deciding.set(Some(Decision::Approve(refund.clone())))
                                                },
                                                "Duyệt"
                                            }
                                            button {
                                                class: "btn btn-xs btn-error btn-outline",
                                                onclick: {
                                                    let refund = refund.clone();
                                                    move |_| deciding.set(Some(Decision::Reject(refund.clone())))
                                                },
                                                "Từ chối"
                                            }
                                        }
                                    } else {
                                        span { class: "text-xs opacity-70",
                                            {format_optional_datetime(refund.processed_at.as_ref())}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            {match deciding() {
                Some(Decision::Approve(refund)) => rsx!(
                    Modal {
                        title: "Duyệt hoàn tiền",
                        on_close: move |_| deciding.set(None),
                        p { class: "mb-2",
                            {format!("Hoàn {} cho vé {}", format_vnd(refund.display_amount()), refund.ticket_code.clone().unwrap_or_default())}
                        }
                        ReasonForm {
                            prompt: "Ghi chú (không bắt buộc)",
                            confirm: "Duyệt",
                            confirm_class: "btn-success",
                            on_save: move |note| approve.call((refund.id, note)),
                            on_cancel: move |_| deciding.set(None),
                        }
                    }
                ),
                Some(Decision::Reject(refund)) => rsx!(
                    Modal {
                        title: "Từ chối hoàn tiền",
                        on_close: move |_| deciding.set(None),
                        ReasonForm {
                            prompt: "Lý do từ chối",
                            confirm: "Từ chối",
                            confirm_class: "btn-error",
                            required: true,
                            on_save: move |reason: Option<String>| {
                                if let Some(reason) = reason {
                                    reject.call((refund.id, reason));
                                }
                            },
                            on_cancel: move |_| deciding.set(None),
                        }
                    }
                ),
                None => rsx!(),
            }}
        }
    )
}
