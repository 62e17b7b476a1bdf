use railway_admin::{
    api::{trips::TripFilter, TripApi},
    error::Error,
    model::trip::{TripDelayRequest, TripStatus},
};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect search, status, paging and the default departure sort in the query
async fn searches_trips() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/trips/paged/search",
            &[
                ("search", "SE1"),
                ("status", "scheduled"),
                ("page", "0"),
                ("size", "10"),
                ("sort", "departureTime,asc"),
            ],
            factory::page(vec![factory::trip(1, "scheduled")], 0, 10, 1),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = TripFilter {
        search: "SE1".to_string(),
        status: Some(TripStatus::Scheduled),
        sort: None,
    };
    let page = TripApi::new(&client).search(&filter, 0, 10).await?;

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].status, TripStatus::Scheduled);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a delay to send the minutes and reason
async fn delays_trip() -> Result<(), Error> {
    let mut delayed = factory::trip(1, "delayed");
    delayed["delayMinutes"] = json!(45);
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/trips/1/delay",
            json!({ "delayMinutes": 45, "reason": "Sự cố tín hiệu" }),
            delayed,
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trip = TripApi::new(&client)
        .delay(
            1,
            &TripDelayRequest {
                delay_minutes: 45,
                reason: Some("Sự cố tín hiệu".to_string()),
            },
        )
        .await?
        .expect("response carries the trip");

    assert_eq!(trip.status, TripStatus::Delayed);
    assert_eq!(trip.delay_minutes, 45);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a cancellation to be sent with its reason
async fn cancels_trip() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/trips/2/cancel",
            json!({ "reason": "Bão" }),
            factory::trip(2, "cancelled"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trip = TripApi::new(&client)
        .cancel(2, Some("Bão".to_string()))
        .await?
        .expect("response carries the trip");

    assert_eq!(trip.status, TripStatus::Cancelled);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a status change to PUT the new status
async fn updates_trip_status() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/trips/3/status",
            json!({ "status": "completed" }),
            factory::trip(3, "completed"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trip = TripApi::new(&client)
        .update_status(3, TripStatus::Completed)
        .await?
        .expect("response carries the trip");

    assert_eq!(trip.status, TripStatus::Completed);
    test.assert_mocks();

    Ok(())
}
