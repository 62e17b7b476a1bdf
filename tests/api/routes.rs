use railway_admin::{api::RouteApi, error::Error};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect route stations to come back ordered by stop order
async fn orders_route_stations() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/routes/1/stations",
            &[],
            json!([
                factory::route_stop(3, 3),
                factory::route_stop(1, 1),
                factory::route_stop(2, 2),
            ]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let stops = RouteApi::new(&client).stations(1).await?;
    let order: Vec<i32> = stops.iter().map(|s| s.stop_order).collect();

    assert_eq!(order, vec![1, 2, 3]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect routes listed with stations to expose their stops in order
async fn lists_routes_with_stations() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/routes/with-stations",
            &[],
            json!([factory::route(
                1,
                vec![factory::route_stop(2, 2), factory::route_stop(1, 1)]
            )]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let routes = RouteApi::new(&client).with_stations().await?;
    let stops = routes[0].ordered_stops();

    assert_eq!(stops[0].station_id, 1);
    assert_eq!(stops[1].station_id, 2);
    test.assert_mocks();

    Ok(())
}
