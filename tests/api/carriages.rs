use railway_admin::{
    api::CarriageApi,
    error::Error,
    model::carriage::{CarriageType, SeatPayload, SeatStatus},
    view::seats::{capacity_gap, SeatSummary},
};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect carriages with seats to be summarized by seat status
async fn summarizes_carriage_seats() -> Result<(), Error> {
    let seats = vec![
        factory::seat(1, 7, "available"),
        factory::seat(2, 7, "booked"),
        factory::seat(3, 7, "occupied"),
        factory::seat(4, 7, "held"),
    ];
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/carriages/with-seats",
            &[],
            json!([factory::carriage(7, 1, seats)]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let carriages = CarriageApi::new(&client).list_with_seats().await?;
    let summary = SeatSummary::from_carriages(&carriages);

    assert_eq!(carriages[0].carriage_type, CarriageType::SoftSeat);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.available, 1);
    assert_eq!(summary.booked, 2);
    assert_eq!(summary.reserved, 1);
    assert_eq!(capacity_gap(&carriages[0]), 60);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a carriage without a `seats` field to decode with no seats
async fn carriage_without_seats_field() -> Result<(), Error> {
    let mut body = factory::carriage(8, 1, vec![]);
    if let Some(object) = body.as_object_mut() {
        object.remove("seats");
    }
    let test = TestBuilder::new()
        .with_api_endpoint("GET", "/carriages/8/with-seats", &[], body, 1)
        .build()
        .await;
    let (client, _) = test_client(&test);

    let carriage = CarriageApi::new(&client).get_with_seats(8).await?;

    assert!(carriage.seats.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect seat creation to post the carriage id and status
async fn creates_seat() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/seats",
            json!({ "carriageId": 7, "seatNumber": "13", "status": "available" }),
            factory::seat(13, 7, "available"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let seat = CarriageApi::new(&client)
        .create_seat(&SeatPayload {
            carriage_id: 7,
            seat_number: "13".to_string(),
            seat_type: None,
            status: SeatStatus::Available,
            price: Some(450_000.0),
        })
        .await?
        .expect("response carries the seat");

    assert_eq!(seat.seat_number, "13");
    assert_eq!(seat.carriage_id, Some(7));
    test.assert_mocks();

    Ok(())
}
