use railway_admin::{
    api::{bookings::BookingFilter, BookingApi},
    error::Error,
    model::booking::{BookingStatus, PaymentStatus},
    view::{optimistic::cancel_booking, Pagination},
};
use railway_admin_test_utils::prelude::*;

use crate::util::test_client;

#[tokio::test]
/// Expect the first page of confirmed bookings to read "Trang 1 / 3 (25 đơn đặt vé)" with 10 rows
async fn lists_confirmed_bookings_first_page() -> Result<(), Error> {
    let content = (1..=10)
        .map(|id| factory::booking(id, "confirmed", "paid"))
        .collect();
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/bookings",
            &[("bookingStatus", "confirmed"), ("page", "0"), ("size", "10")],
            factory::page(content, 0, 10, 25),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = BookingFilter {
        booking_status: Some(BookingStatus::Confirmed),
        identity_card: String::new(),
    };
    let page = BookingApi::new(&client).list(&filter, 0, 10).await?;
    let pagination = Pagination::from_page(&page);

    assert_eq!(page.content.len(), 10);
    assert_eq!(pagination.summary("đơn đặt vé"), "Trang 1 / 3 (25 đơn đặt vé)");
    assert!(!pagination.can_previous());
    assert!(pagination.can_next());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the last page to hold the remaining rows
async fn last_page_holds_remaining_rows() -> Result<(), Error> {
    let content = (21..=25)
        .map(|id| factory::booking(id, "confirmed", "paid"))
        .collect();
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/bookings",
            &[("page", "2"), ("size", "10")],
            factory::page(content, 2, 10, 25),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let page = BookingApi::new(&client)
        .list(&BookingFilter::default(), 2, 10)
        .await?;
    let pagination = Pagination::from_page(&page);

    assert_eq!(page.content.len(), 5);
    assert!(!pagination.can_next());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect identity card filters to be sent as `identityCard`
async fn filters_by_identity_card() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/bookings",
            &[("identityCard", "001203004567")],
            factory::page(vec![factory::booking(4, "pending", "pending")], 0, 10, 1),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = BookingFilter {
        booking_status: None,
        identity_card: " 001203004567 ".to_string(),
    };
    let page = BookingApi::new(&client).list(&filter, 0, 10).await?;

    assert_eq!(page.content[0].status, BookingStatus::Pending);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect cancelling to hit the admin endpoint and update the local row without reloading
async fn cancel_updates_local_state() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/bookings",
            &[],
            factory::page(
                vec![
                    factory::booking(1, "confirmed", "paid"),
                    factory::booking(2, "pending", "pending"),
                ],
                0,
                10,
                2,
            ),
            1,
        )
        .with_api_endpoint("POST", "/bookings/cancel/2", &[], serde_json::json!({}), 1)
        .build()
        .await;
    let (client, _) = test_client(&test);
    let api = BookingApi::new(&client);

    let mut bookings = api.list(&BookingFilter::default(), 0, 10).await?.content;
    api.cancel(2).await?;
    assert!(cancel_booking(&mut bookings, 2));

    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
    assert_eq!(bookings[1].payment_status, PaymentStatus::Cancelled);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a page whose content is not an array to be reported as malformed
async fn rejects_malformed_page() {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/bookings",
            &[],
            serde_json::json!({ "content": "none", "totalPages": 0 }),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = BookingApi::new(&client)
        .list(&BookingFilter::default(), 0, 10)
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}
