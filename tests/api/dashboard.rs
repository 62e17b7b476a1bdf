use railway_admin::{
    api::DashboardApi,
    error::Error,
    model::dashboard::ReportRequest,
};
use railway_admin_test_utils::prelude::*;
use chrono::NaiveDate;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect the overview counters to decode
async fn fetches_overview() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/admin/dashboard/overview",
            &[],
            factory::dashboard_overview(),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let overview = DashboardApi::new(&client).overview().await?;

    assert_eq!(overview.total_bookings, 5120);
    assert_eq!(overview.pending_refunds, 7);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect daily revenue to be requested for the given number of days
async fn fetches_daily_revenue() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/admin/dashboard/daily-revenue",
            &[("days", "7")],
            json!([
                { "date": "2024-05-01", "revenue": 120000000.0, "bookings": 310 },
                { "date": "2024-05-02", "revenue": 98000000.0 },
            ]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let revenue = DashboardApi::new(&client).daily_revenue(7).await?;

    assert_eq!(revenue.len(), 2);
    assert_eq!(revenue[1].bookings, 0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the generated report to be returned as raw bytes
async fn downloads_report_bytes() -> Result<(), Error> {
    let bytes: &[u8] = b"PK\x03\x04report";
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("POST", "/admin/dashboard/reports/generate")
                .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
                .match_body(mockito::Matcher::PartialJson(json!({
                    "reportType": "revenue",
                    "startDate": "2024-05-01",
                    "endDate": "2024-05-31",
                })))
                .with_status(200)
                .with_header(
                    "content-type",
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                )
                .with_body(bytes)
                .expect(1)
                .create()
        })
        .build()
        .await;
    let (client, _) = test_client(&test);

    let request = ReportRequest {
        report_type: "revenue".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    };
    let report = DashboardApi::new(&client).generate_report(&request).await?;

    assert_eq!(report, bytes);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failing dashboard endpoint to surface as an API error
async fn popular_routes_failure() {
    let test = TestBuilder::new()
        .with_endpoint(
            "GET",
            "/admin/dashboard/popular-routes",
            500,
            json!({ "message": "Internal Server Error" }),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = DashboardApi::new(&client).popular_routes(5).await;

    assert!(matches!(result, Err(Error::Api { status: 500, .. })));
}
