use dioxus::prelude::*;
use railway_admin::{
    api::{
        users::{SortDirection, UserFilter},
        UserApi,
    },
    model::user::{Role, User, UserStatus},
    view::{format::format_optional_datetime, status::StatusLabel, ListState, Pagination},
};

use crate::client::{
    components::{badge::status_badge, ErrorBanner, Modal, Page, PaginationControl},
    util::use_loader,
};

const SORTABLE: [(&str, &str); 3] = [
    ("fullName", "Họ tên"),
    ("email", "Email"),
    ("createdAt", "Ngày tạo"),
];

#[component]
pub fn Users() -> Element {
    let mut list = use_signal(ListState::<UserFilter>::default);
    let users = use_loader(
        move || list(),
        |client, state: ListState<UserFilter>| async move {
            UserApi::new(&client)
                .list(state.filter(), state.page(), state.size())
                .await
        },
    );

    let mut search = use_signal(String::new);
    let mut viewing = use_signal(|| None::<i64>);

    let mut toggle_sort = move |column: &'static str| {
        list.write().update_filter(|f| {
            if f.sort_by.as_deref() == Some(column) {
                f.sort_direction = match f.sort_direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                };
            } else {
                f.sort_by = Some(column.to_string());
                f.sort_direction = SortDirection::Asc;
            }
        });
    };

    let page = users.data.read();
    let pagination = Pagination::from_page(&page);
    let filter = list.read().filter().clone();

    rsx!(
        Page { title: "Quản lý người dùng",
            div { class: "flex flex-wrap gap-2",
                form {
                    class: "join",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let value = search();
                        list.write().update_filter(|f| f.search_term = value);
                    },
                    input {
                        class: "input input-bordered join-item w-64",
                        placeholder: "Tên, email hoặc số điện thoại",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    button { class: "btn join-item", r#type: "submit", "Tìm" }
                }
                select {
                    class: "select select-bordered w-40",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| {
                            f.role = (!value.is_empty()).then(|| Role::from(value));
                        });
                    },
                    option { value: "", "Tất cả vai trò" }
                    for role in Role::ALL {
                        option { value: role.as_str(), {role.label()} }
                    }
                }
                select {
                    class: "select select-bordered w-44",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filter(|f| {
                            f.status = (!value.is_empty()).then(|| UserStatus::from(value));
                        });
                    },
                    option { value: "", "Tất cả trạng thái" }
                    for status in UserStatus::ALL {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
            }

            if let Some(message) = users.error.cloned() {
                ErrorBanner { message: message, on_retry: move |_| users.retry() }
            }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            for (column, label) in SORTABLE {
                                th {
                                    class: "cursor-pointer select-none",
                                    onclick: move |_| toggle_sort(column),
                                    "{label}"
                                    {sort_indicator(&filter, column)}
                                }
                            }
                            th { "Điện thoại" }
                            th { "Vai trò" }
                            th { "Trạng thái" }
                            th {}
                        }
                    }
                    tbody {
                        if *users.loading.read() && page.is_empty() {
                            tr {
                                td { colspan: 7, class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if page.is_empty() {
                            tr {
                                td { colspan: 7, class: "text-center opacity-70", "Không có người dùng nào" }
                            }
                        }
                        for user in page.content.iter().cloned() {
                            tr { key: "{user.id}",
                                td { "{user.full_name}" }
                                td { "{user.email}" }
                                td { {format_optional_datetime(user.created_at.as_ref())} }
                                td { {user.phone.clone().unwrap_or_default()} }
                                td {
                                    div { class: "flex gap-1",
                                        for role in user.roles.iter() {
                                            {status_badge(role)}
                                        }
                                    }
                                }
                                td { {status_badge(&user.status)} }
                                td {
                                    button {
                                        class: "btn btn-xs btn-ghost",
                                        onclick: move |_| viewing.set(Some(user.id)),
                                        "Chi tiết"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                pagination: pagination,
                noun: "người dùng",
                on_page: move |page| list.write().set_page(page, pagination.total_pages),
                on_size: move |size| list.write().set_size(size),
            }

            if let Some(id) = viewing() {
                Modal {
                    title: "Thông tin người dùng",
                    on_close: move |_| viewing.set(None),
                    UserDetail { id: id }
                }
            }
        }
    )
}

fn sort_indicator(filter: &UserFilter, column: &str) -> &'static str {
    if filter.sort_by.as_deref() != Some(column) {
        return "";
    }
    match filter.sort_direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

#[component]
fn UserDetail(id: i64) -> Element {
    let user = use_loader(
        move || id,
        |client, id| async move { UserApi::new(&client).get(id).await.map(Some) },
    );

    if let Some(message) = user.error.cloned() {
        return rsx!(ErrorBanner { message: message, on_retry: move |_| user.retry() });
    }

    let Some(user): Option<User> = user.data.cloned() else {
        return rsx!(span { class: "loading loading-spinner" });
    };

    rsx!(
        dl { class: "grid grid-cols-3 gap-2",
            dt { class: "opacity-70", "Mã" }
            dd { class: "col-span-2 font-mono", "{user.id}" }
            dt { class: "opacity-70", "Họ tên" }
            dd { class: "col-span-2", "{user.full_name}" }
            dt { class: "opacity-70", "Email" }
            dd { class: "col-span-2", "{user.email}" }
            dt { class: "opacity-70", "Điện thoại" }
            dd { class: "col-span-2", {user.phone.clone().unwrap_or_else(|| "-".to_string())} }
            dt { class: "opacity-70", "Vai trò" }
            dd { class: "col-span-2 flex gap-1",
                for role in user.roles.iter() {
                    {status_badge(role)}
                }
            }
            dt { class: "opacity-70", "Trạng thái" }
            dd { class: "col-span-2", {status_badge(&user.status)} }
            dt { class: "opacity-70", "Ngày tạo" }
            dd { class: "col-span-2", {format_optional_datetime(user.created_at.as_ref())} }
        }
    )
}
