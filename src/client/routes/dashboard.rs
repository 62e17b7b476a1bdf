use chrono::{Duration, Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFileExcel;
use dioxus_free_icons::Icon;
use railway_admin::{
    api::DashboardApi,
    model::dashboard::{
        DailyRevenue, DashboardOverview, PopularRoute, ReportRequest, RevenueAnalysis,
        TicketDistribution,
    },
    view::{
        fallback::{
            sample_daily_revenue, sample_overview, sample_popular_routes,
            sample_ticket_distribution,
        },
        format::{format_date, format_vnd},
    },
    ApiClient,
};

use crate::client::{
    components::{ErrorBanner, Page},
    util::{run_action, save_file, use_loader, Loader},
};

const POPULAR_ROUTE_LIMIT: u32 = 5;
const REVENUE_DAYS: [u32; 2] = [7, 30];
const PERIODS: [(&str, &str); 3] = [("week", "Tuần"), ("month", "Tháng"), ("year", "Năm")];
const REPORT_TYPES: [(&str, &str); 3] = [
    ("revenue", "Doanh thu"),
    ("bookings", "Đặt vé"),
    ("tickets", "Vé"),
];
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Fetched data, or the sample data when the fetch failed
fn or_sample<T: Clone>(loader: &Loader<T>, sample: impl FnOnce() -> T) -> (T, bool) {
    if loader.error.read().is_some() {
        (sample(), true)
    } else {
        (loader.data.cloned(), false)
    }
}

#[component]
pub fn Dashboard() -> Element {
    let today = Local::now().date_naive();

    let mut days = use_signal(|| REVENUE_DAYS[0]);
    let mut period = use_signal(|| PERIODS[1].0);

    let overview = use_loader(
        || (),
        |client, _| async move { DashboardApi::new(&client).overview().await },
    );
    let daily = use_loader(
        move || days(),
        |client, days| async move { DashboardApi::new(&client).daily_revenue(days).await },
    );
    let routes = use_loader(
        || (),
        |client, _| async move {
            DashboardApi::new(&client)
                .popular_routes(POPULAR_ROUTE_LIMIT)
                .await
        },
    );
    let distribution = use_loader(
        || (),
        |client, _| async move { DashboardApi::new(&client).ticket_distribution().await },
    );
    let analysis = use_loader(
        move || period(),
        |client, period: &'static str| async move {
            DashboardApi::new(&client).revenue_analysis(period).await
        },
    );

    let (overview_data, overview_sample) = or_sample(&overview, sample_overview);
    let (daily_data, daily_sample) = or_sample(&daily, || sample_daily_revenue(today, days()));
    let (routes_data, routes_sample) = or_sample(&routes, sample_popular_routes);
    let (distribution_data, distribution_sample) =
        or_sample(&distribution, sample_ticket_distribution);

    rsx!(
        Page { title: "Tổng quan",
            OverviewStats { overview: overview_data, sample: overview_sample }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-4",
                Panel {
                    title: "Doanh thu theo ngày",
                    sample: daily_sample,
                    class: "xl:col-span-2",
                    actions: rsx!(
                        div { class: "join",
                            for option in REVENUE_DAYS {
                                button {
                                    class: if days() == option { "btn btn-xs join-item btn-active" } else { "btn btn-xs join-item" },
                                    onclick: move |_| days.set(option),
                                    {format!("{} ngày", option)}
                                }
                            }
                        }
                    ),
                    RevenueChart { entries: daily_data }
                }
                Panel { title: "Phân bố vé", sample: distribution_sample,
                    DistributionList { entries: distribution_data }
                }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4",
                Panel { title: "Tuyến phổ biến", sample: routes_sample,
                    PopularRouteTable { routes: routes_data }
                }
                Panel {
                    title: "Phân tích doanh thu",
                    actions: rsx!(
                        select {
                            class: "select select-bordered select-xs",
                            onchange: move |e| {
                                let value = e.value();
                                if let Some((key, _)) = PERIODS.iter().find(|(key, _)| *key == value) {
                                    period.set(*key);
                                }
                            },
                            for (key, label) in PERIODS {
                                option { value: key, selected: key == period(), "{label}" }
                            }
                        }
                    ),
                    if let Some(message) = analysis.error.cloned() {
                        ErrorBanner { message: message, on_retry: move |_| analysis.retry() }
                    } else {
                        AnalysisTable { rows: analysis.data.cloned() }
                    }
                }
            }

            Panel { title: "Xuất báo cáo",
                ReportForm { today: today }
            }
        }
    )
}

#[component]
fn Panel(
    title: String,
    #[props(default)] sample: bool,
    #[props(default)] class: String,
    actions: Option<Element>,
    children: Element,
) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm {class}",
            div { class: "card-body",
                div { class: "flex items-center justify-between gap-2",
                    h2 { class: "card-title text-base",
                        "{title}"
                        if sample {
                            span { class: "badge badge-warning badge-sm", "Dữ liệu mẫu" }
                        }
                    }
                    if let Some(actions) = actions {
                        {actions}
                    }
                }
                {children}
            }
        }
    )
}

#[component]
fn OverviewStats(overview: DashboardOverview, sample: bool) -> Element {
    let growth = overview.revenue_growth.map(|g| {
        let class = if g >= 0.0 { "text-success" } else { "text-error" };
        (format!("{:+.1}% so với kỳ trước", g), class)
    });

    rsx!(
        if sample {
            div { class: "alert alert-warning text-sm",
                "Không thể kết nối máy chủ, đang hiển thị dữ liệu mẫu."
            }
        }
        div { class: "stats stats-vertical md:stats-horizontal shadow-sm bg-base-100",
            div { class: "stat",
                div { class: "stat-title", "Doanh thu" }
                div { class: "stat-value text-primary text-2xl", {format_vnd(overview.total_revenue)} }
                if let Some((text, class)) = growth {
                    div { class: "stat-desc {class}", "{text}" }
                }
            }
            div { class: "stat",
                div { class: "stat-title", "Đơn đặt vé" }
                div { class: "stat-value text-2xl", "{overview.total_bookings}" }
                div { class: "stat-desc", "{overview.total_tickets} vé đã bán" }
            }
            div { class: "stat",
                div { class: "stat-title", "Chuyến đang chạy" }
                div { class: "stat-value text-2xl", "{overview.active_trips}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Người dùng" }
                div { class: "stat-value text-2xl", "{overview.total_users}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Chờ hoàn tiền" }
                div { class: "stat-value text-2xl text-warning", "{overview.pending_refunds}" }
            }
        }
    )
}

#[component]
fn RevenueChart(entries: Vec<DailyRevenue>) -> Element {
    if entries.is_empty() {
        return rsx!(p { class: "opacity-70", "Chưa có doanh thu" });
    }

    let max = entries
        .iter()
        .map(|e| e.revenue)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let total: f64 = entries.iter().map(|e| e.revenue).sum();

    rsx!(
        p { class: "text-sm opacity-70", {format!("Tổng {}", format_vnd(total))} }
        div { class: "flex items-end gap-1 h-48",
            for entry in entries.iter() {
                div {
                    key: "{entry.date}",
                    class: "flex-1 bg-primary rounded-t tooltip",
                    "data-tip": format!("{}: {}", format_date(&entry.date), format_vnd(entry.revenue)),
                    style: format!("height: {:.1}%", entry.revenue / max * 100.0),
                }
            }
        }
        div { class: "flex justify-between text-xs opacity-70",
            span { {entries.first().map(|e| format_date(&e.date)).unwrap_or_default()} }
            span { {entries.last().map(|e| format_date(&e.date)).unwrap_or_default()} }
        }
    )
}

#[component]
fn DistributionList(entries: Vec<TicketDistribution>) -> Element {
    let total: i64 = entries.iter().map(|e| e.count).sum();

    rsx!(
        ul { class: "flex flex-col gap-3",
            for entry in entries.iter() {
                li { key: "{entry.category}",
                    {
                        let percentage = entry
                            .percentage
                            .unwrap_or_else(|| share(entry.count, total));
                        rsx!(
                            div { class: "flex justify-between text-sm",
                                span { "{entry.category}" }
                                span { {format!("{:.1}% ({})", percentage, entry.count)} }
                            }
                            progress {
                                class: "progress progress-primary",
                                value: format!("{:.1}", percentage),
                                max: "100",
                            }
                        )
                    }
                }
            }
        }
    )
}

fn share(count: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

#[component]
fn PopularRouteTable(routes: Vec<PopularRoute>) -> Element {
    rsx!(
        table { class: "table table-sm",
            thead {
                tr {
                    th { "Tuyến" }
                    th { class: "numeric", "Số vé" }
                    th { class: "numeric", "Doanh thu" }
                }
            }
            tbody {
                for route in routes.iter() {
                    tr { key: "{route.route_name}",
                        td { "{route.route_name}" }
                        td { class: "numeric", "{route.ticket_count}" }
                        td { class: "numeric", {format_vnd(route.revenue)} }
                    }
                }
            }
        }
    )
}

#[component]
fn AnalysisTable(rows: Vec<RevenueAnalysis>) -> Element {
    if rows.is_empty() {
        return rsx!(p { class: "opacity-70", "Không có dữ liệu" });
    }

    rsx!(
        table { class: "table table-sm",
            thead {
                tr {
                    th { "Kỳ" }
                    th { class: "numeric", "Doanh thu" }
                    th { class: "numeric", "Hoàn tiền" }
                    th { class: "numeric", "Thực thu" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr { key: "{row.period}",
                        td { "{row.period}" }
                        td { class: "numeric", {format_vnd(row.revenue)} }
                        td { class: "numeric", {format_vnd(row.refunds)} }
                        td { class: "numeric font-semibold", {format_vnd(row.net_revenue)} }
                    }
                }
            }
        }
    )
}

fn report_file_name(request: &ReportRequest) -> String {
    format!(
        "bao-cao-{}-{}-{}.xlsx",
        request.report_type,
        request.start_date.format("%Y%m%d"),
        request.end_date.format("%Y%m%d")
    )
}

#[component]
fn ReportForm(today: NaiveDate) -> Element {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut report_type = use_signal(|| REPORT_TYPES[0].0.to_string());
    let mut start = use_signal(move || (today - Duration::days(30)).to_string());
    let mut end = use_signal(move || today.to_string());
    let mut generating = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |e: FormEvent| {
        e.prevent_default();

        let (Ok(start_date), Ok(end_date)) = (start().parse::<NaiveDate>(), end().parse::<NaiveDate>())
        else {
            error.set(Some("Vui lòng chọn khoảng thời gian".to_string()));
            return;
        };
        if end_date < start_date {
            error.set(Some("Ngày kết thúc phải sau ngày bắt đầu".to_string()));
            return;
        }

        let request = ReportRequest {
            report_type: report_type(),
            start_date,
            end_date,
        };
        let file_name = report_file_name(&request);
        let client = client.clone();

        generating.set(true);
        error.set(None);
        run_action(
            async move {
                let result = DashboardApi::new(&client).generate_report(&request).await;
                generating.set(false);
                result
            },
            error,
            navigator,
            move |bytes: Vec<u8>| {
                if let Err(reason) = save_file(&file_name, XLSX_MIME, &bytes) {
                    error.set(Some(reason));
                }
            },
        );
    };

    rsx!(
        if let Some(message) = error() {
            ErrorBanner { message: message }
        }
        form { class: "flex flex-wrap items-end gap-3", onsubmit: submit,
            label { class: "form-control",
                span { class: "label-text", "Loại báo cáo" }
                select {
                    class: "select select-bordered",
                    onchange: move |e| report_type.set(e.value()),
                    for (value, label) in REPORT_TYPES {
                        option { value: value, selected: value == report_type(), "{label}" }
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Từ ngày" }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{start}",
                    oninput: move |e| start.set(e.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Đến ngày" }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{end}",
                    oninput: move |e| end.set(e.value()),
                }
            }
            button {
                class: "btn btn-primary flex gap-2",
                r#type: "submit",
                disabled: generating(),
                if generating() {
                    span { class: "loading loading-spinner loading-sm" }
                } else {
                    Icon { width: 14, height: 14, icon: FaFileExcel }
                }
                "Tải báo cáo"
            }
        }
    )
}
