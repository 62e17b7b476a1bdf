use railway_admin::{api::RefundApi, error::Error, model::refund::RefundStatus};
use railway_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

#[tokio::test]
/// Expect the status filter to be sent and backend aliases to be normalized
async fn lists_pending_refunds() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/refunds/requests",
            &[("status", "pending")],
            json!([factory::refund(1, "pending"), factory::refund(2, "PROCESSING")]),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let refunds = RefundApi::new(&client)
        .list(Some(&RefundStatus::Pending))
        .await?;

    assert!(refunds.iter().all(|r| r.is_pending()));
    assert_eq!(refunds[0].display_amount(), 640_000.0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect approval to send the admin note
async fn approves_refund() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/refunds/1/approve",
            json!({ "adminNote": "Đã xác minh" }),
            factory::refund(1, "approved"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let refund = RefundApi::new(&client)
        .approve(1, Some("Đã xác minh".to_string()))
        .await?
        .expect("response carries the refund");

    assert_eq!(refund.status, RefundStatus::Approved);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect rejection to send the trimmed reason
async fn rejects_refund() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PUT",
            "/refunds/2/reject",
            json!({ "reason": "Quá hạn hoàn vé" }),
            factory::refund(2, "rejected"),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let refund = RefundApi::new(&client)
        .reject(2, " Quá hạn hoàn vé ")
        .await?
        .expect("response carries the refund");

    assert_eq!(refund.status, RefundStatus::Rejected);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an approval acknowledged with an empty body to succeed without a refund
async fn accepts_empty_approval_response() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PUT", "/refunds/7/approve")
                .with_status(200)
                .with_body("")
                .expect(1)
                .create()
        })
        .build()
        .await;
    let (client, _) = test_client(&test);

    let refund = RefundApi::new(&client).approve(7, None).await?;

    assert_eq!(refund, None);
    test.assert_mocks();

    Ok(())
}
