use railway_admin::{
    api::{tickets::TicketFilter, TicketApi},
    error::Error,
    model::ticket::TicketStatus,
};
use railway_admin_test_utils::prelude::*;

use crate::util::test_client;

#[tokio::test]
/// Expect ticket filters to be sent along with paging
async fn lists_tickets_with_filters() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/tickets",
            &[("status", "used"), ("search", "TK000001"), ("page", "0"), ("size", "20")],
            factory::page(vec![factory::ticket(1, "used")], 0, 20, 1),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = TicketFilter {
        status: Some(TicketStatus::Used),
        search: "TK000001".to_string(),
    };
    let page = TicketApi::new(&client).list(&filter, 0, 20).await?;

    assert_eq!(page.content[0].ticket_code, "TK000001");
    assert_eq!(page.content[0].status, TicketStatus::Used);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a single ticket to be fetched by id
async fn gets_ticket() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint("GET", "/tickets/9", &[], factory::ticket(9, "booked"), 1)
        .build()
        .await;
    let (client, _) = test_client(&test);

    let ticket = TicketApi::new(&client).get(9).await?;

    assert_eq!(ticket.id, 9);
    assert_eq!(ticket.passenger_name, "Lê Thị Hoa");
    test.assert_mocks();

    Ok(())
}
