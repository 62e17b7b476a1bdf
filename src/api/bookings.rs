use reqwest::Method;

use crate::{
    api::{push_opt, ApiClient, Query},
    error::Error,
    model::{booking::{Booking, BookingStatus}, Page},
};

/// Filters of `GET /bookings`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingFilter {
    pub booking_status: Option<BookingStatus>,
    pub identity_card: String,
}

pub struct BookingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookingApi<'a> {
    /// Creates a new instance of [`BookingApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: u32,
        size: u32,
    ) -> Result<Page<Booking>, Error> {
        let mut query: Query = Vec::new();
        push_opt(
            &mut query,
            "bookingStatus",
            filter.booking_status.as_ref().map(|s| s.as_str()),
        );
        push_opt(&mut query, "identityCard", Some(filter.identity_card.as_str()));
        query.push(("page", page.to_string()));
        query.push(("size", size.to_string()));

        self.client.get_page("/bookings", &query).await
    }

    /// Cancels a booking as an admin, the refund itself is handled by the backend
    pub async fn cancel(&self, id: i64) -> Result<(), Error> {
        self.client
            .execute(Method::POST, &format!("/bookings/cancel/{}", id), None)
            .await
    }
}
