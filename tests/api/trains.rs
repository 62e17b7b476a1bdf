use railway_admin::{
    api::TrainApi,
    error::Error,
    model::train::{TrainPayload, TrainStatus},
};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

fn payload() -> TrainPayload {
    TrainPayload {
        train_number: "SE3".to_string(),
        name: "Thống Nhất SE3".to_string(),
        train_type: Some("express".to_string()),
        capacity: 640,
        status: TrainStatus::Active,
    }
}

#[tokio::test]
/// Expect trains with unknown statuses to still be listed
async fn lists_trains_with_unknown_status() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/trains",
            &[],
            json!([factory::train(1, "active"), factory::train(2, "decommissioned")]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trains = TrainApi::new(&client).list().await?;

    assert_eq!(trains.len(), 2);
    assert_eq!(trains[0].status, TrainStatus::Active);
    assert_eq!(trains[1].status, TrainStatus::Other("decommissioned".to_string()));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect only active trains from the status endpoint
async fn lists_active_trains() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/trains/status/active",
            &[],
            json!([factory::train(1, "active")]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trains = TrainApi::new(&client).active().await?;

    assert_eq!(trains.len(), 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect create to send a camelCase body and return the stored train
async fn creates_train() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/trains",
            json!({ "trainNumber": "SE3", "capacity": 640, "status": "active" }),
            factory::train(3, "active"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let train = TrainApi::new(&client)
        .create(&payload())
        .await?
        .expect("response carries the train");

    assert_eq!(train.id, 3);
    assert_eq!(train.train_number, "SE3");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect update to PUT the payload to the train's path
async fn updates_train() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/trains/3",
            json!({ "status": "maintenance" }),
            factory::train(3, "maintenance"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let mut payload = payload();
    payload.status = TrainStatus::Maintenance;
    let train = TrainApi::new(&client)
        .update(3, &payload)
        .await?
        .expect("response carries the train");

    assert_eq!(train.status, TrainStatus::Maintenance);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect delete to accept an empty 200 response
async fn deletes_train() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/trains/3")
                .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await;
    let (client, _) = test_client(&test);

    TrainApi::new(&client).delete(3).await?;

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a 409 to carry the server's message
async fn delete_conflict_surfaces_message() {
    let test = TestBuilder::new()
        .with_endpoint(
            "DELETE",
            "/trains/1",
            409,
            json!({ "message": "Tàu đang có chuyến được lên lịch" }),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = TrainApi::new(&client).delete(1).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Tàu đang có chuyến được lên lịch");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
