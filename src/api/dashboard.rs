use crate::{
    api::ApiClient,
    error::Error,
    model::dashboard::{
        DailyRevenue, DashboardOverview, PopularRoute, ReportRequest, RevenueAnalysis,
        TicketDistribution,
    },
};

pub struct DashboardApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    /// Creates a new instance of [`DashboardApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn overview(&self) -> Result<DashboardOverview, Error> {
        self.client.get_json("/admin/dashboard/overview", &[]).await
    }

    /// Revenue per day over the last `days` days
    pub async fn daily_revenue(&self, days: u32) -> Result<Vec<DailyRevenue>, Error> {
        self.client
            .get_list("/admin/dashboard/daily-revenue", &[("days", days.to_string())])
            .await
    }

    pub async fn popular_routes(&self, limit: u32) -> Result<Vec<PopularRoute>, Error> {
        self.client
            .get_list("/admin/dashboard/popular-routes", &[("limit", limit.to_string())])
            .await
    }

    pub async fn ticket_distribution(&self) -> Result<Vec<TicketDistribution>, Error> {
        self.client
            .get_list("/admin/dashboard/ticket-distribution", &[])
            .await
    }

    /// `period` is one of `week`, `month` or `year`
    pub async fn revenue_analysis(&self, period: &str) -> Result<Vec<RevenueAnalysis>, Error> {
        self.client
            .get_list(
                "/admin/dashboard/revenue-analysis",
                &[("period", period.to_string())],
            )
            .await
    }

    /// Generates a spreadsheet report and returns the file contents
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, Error> {
        self.client
            .post_for_bytes("/admin/dashboard/reports/generate", request)
            .await
    }
}
