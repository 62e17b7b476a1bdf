use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaChair, FaClipboardList, FaGauge, FaGear, FaLocationDot, FaRotateLeft,
    FaRoute, FaTicket, FaTrain, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Sidebar() -> Element {
    rsx!(
        aside {
            class: "w-64 shrink-0 bg-base-200 min-h-screen",
            div { class: "flex items-center gap-2 px-4 h-16",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaTrain
                }
                p { class: "text-xl", "Đường sắt" }
                p { class: "text-xs", "Admin" }
            }
            ul { class: "menu w-full gap-1",
                SidebarLink { to: Route::Dashboard {}, label: "Tổng quan",
                    Icon { width: 16, height: 16, icon: FaGauge }
                }
                SidebarLink { to: Route::Trains {}, label: "Tàu",
                    Icon { width: 16, height: 16, icon: FaTrain }
                }
                SidebarLink { to: Route::Carriages {}, label: "Toa & ghế",
                    Icon { width: 16, height: 16, icon: FaChair }
                }
                SidebarLink { to: Route::Stations {}, label: "Ga",
                    Icon { width: 16, height: 16, icon: FaLocationDot }
                }
                SidebarLink { to: Route::TrainRoutes {}, label: "Tuyến đường",
                    Icon { width: 16, height: 16, icon: FaRoute }
                }
                SidebarLink { to: Route::Trips {}, label: "Chuyến tàu",
                    Icon { width: 16, height: 16, icon: FaCalendarDays }
                }
                SidebarLink { to: Route::Bookings {}, label: "Đặt vé",
                    Icon { width: 16, height: 16, icon: FaClipboardList }
                }
                SidebarLink { to: Route::Tickets {}, label: "Vé",
                    Icon { width: 16, height: 16, icon: FaTicket }
                }
                SidebarLink { to: Route::Refunds {}, label: "Hoàn vé",
                    Icon { width: 16, height: 16, icon: FaRotateLeft }
                }
                SidebarLink { to: Route::Users {}, label: "Người dùng",
                    Icon { width: 16, height: 16, icon: FaUsers }
                }
                SidebarLink { to: Route::Settings {}, label: "Cài đặt",
                    Icon { width: 16, height: 16, icon: FaGear }
                }
            }
        }
    )
}

#[component]
fn SidebarLink(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link {
                to: to,
                class: "sidebar-link flex gap-2",
                active_class: "active",
                {children}
                "{label}"
            }
        }
    )
}
