use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOverview {
    pub total_revenue: f64,
    pub total_bookings: i64,
    pub total_tickets: i64,
    pub total_users: i64,
    pub active_trips: i64,
    pub pending_refunds: i64,
    /// Percent change against the previous period
    pub revenue_growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    #[serde(default)]
    pub bookings: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoute {
    #[serde(default)]
    pub route_id: Option<i64>,
    pub route_name: String,
    pub ticket_count: i64,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDistribution {
    pub category: String,
    pub count: i64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalysis {
    pub period: String,
    pub revenue: f64,
    #[serde(default)]
    pub refunds: f64,
    #[serde(default)]
    pub net_revenue: f64,
}

/// Body of `POST /admin/dashboard/reports/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
