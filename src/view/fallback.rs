//! Placeholder dashboard figures shown when the backend cannot be reached.
//!
//! The dashboard marks them as sample data ("Dữ liệu mẫu"), they are never sent anywhere.

use chrono::{Duration, NaiveDate};

use crate::model::dashboard::{DailyRevenue, DashboardOverview, PopularRoute, TicketDistribution};

pub fn sample_overview() -> DashboardOverview {
    DashboardOverview {
        total_revenue: 1_250_000_000.0,
        total_bookings: 3_420,
        total_tickets: 5_876,
        total_users: 1_284,
        active_trips: 36,
        pending_refunds: 12,
        revenue_growth: Some(8.5),
    }
}

/// One entry per day for the `days` days ending at `today`, oldest first
pub fn sample_daily_revenue(today: NaiveDate, days: u32) -> Vec<DailyRevenue> {
    (0..days)
        .rev()
        .map(|offset| {
            let step = (days - offset) as f64;
            DailyRevenue {
                date: today - Duration::days(offset as i64),
                revenue: 30_000_000.0 + step * 1_500_000.0,
                bookings: 80 + (step as i64) * 3,
            }
        })
        .collect()
}

pub fn sample_popular_routes() -> Vec<PopularRoute> {
    [
        ("Hà Nội - Sài Gòn", 1_240, 980_000_000.0),
        ("Hà Nội - Đà Nẵng", 860, 420_000_000.0),
        ("Sài Gòn - Nha Trang", 710, 250_000_000.0),
        ("Hà Nội - Lào Cai", 530, 160_000_000.0),
    ]
    .into_iter()
    .map(|(name, tickets, revenue)| PopularRoute {
        route_id: None,
        route_name: name.to_string(),
        ticket_count: tickets,
        revenue,
    })
    .collect()
}

pub fn sample_ticket_distribution() -> Vec<TicketDistribution> {
    [("Ghế mềm", 48.0), ("Giường nằm", 37.0), ("Ghế cứng", 15.0)]
        .into_iter()
        .map(|(category, percentage)| TicketDistribution {
            category: category.to_string(),
            count: (percentage * 10.0) as i64,
            percentage: Some(percentage),
        })
        .collect()
}
