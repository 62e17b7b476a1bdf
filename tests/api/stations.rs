use railway_admin::{
    api::{stations::StationFilter, StationApi},
    error::Error,
    model::station::StationStatus,
};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect the search keyword to be trimmed and sent as `keyword`
async fn searches_by_keyword() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/stations/search",
            &[("keyword", "Huế")],
            json!([factory::station(5, "Huế")]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let stations = StationApi::new(&client).search("  Huế ").await?;

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Huế");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the paged endpoint to return a page envelope
async fn lists_paged_stations() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/stations/paged",
            &[("page", "1"), ("size", "20")],
            factory::page(vec![factory::station(21, "Vinh")], 1, 20, 21),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let page = StationApi::new(&client).paged(1, 20).await?;

    assert_eq!(page.number, 1);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[0].status, StationStatus::Active);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the status to be part of the path
async fn lists_by_status() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint("GET", "/stations/status/maintenance", &[], json!([]), 1)
        .build()
        .await;
    let (client, _) = test_client(&test);

    let stations = StationApi::new(&client)
        .by_status(&StationStatus::Maintenance)
        .await?;

    assert!(stations.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a keyword and a status together to search and keep only matching statuses
async fn filters_search_results_by_status() -> Result<(), Error> {
    let mut closed = factory::station(6, "Huế Cũ");
    closed["status"] = json!("inactive");
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/stations/search",
            &[("keyword", "Huế")],
            json!([factory::station(5, "Huế"), closed]),
            1,
        )
        .with_api_endpoint("GET", "/stations/status/inactive", &[], json!([]), 0)
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = StationFilter {
        keyword: "Huế".to_string(),
        status: Some(StationStatus::Inactive),
    };
    let stations = StationApi::new(&client).filtered(&filter).await?;

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].id, 6);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a status without a keyword to use the status endpoint
async fn filters_by_status_without_keyword() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/stations/status/active",
            &[],
            json!([factory::station(1, "Hà Nội")]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = StationFilter {
        keyword: "  ".to_string(),
        status: Some(StationStatus::Active),
    };
    let stations = StationApi::new(&client).filtered(&filter).await?;

    assert_eq!(stations.len(), 1);
    test.assert_mocks();

    Ok(())
}
