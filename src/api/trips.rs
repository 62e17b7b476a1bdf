use crate::{
    api::{push_opt, ApiClient, Query},
    error::Error,
    model::{
        trip::{
            Trip, TripCancelRequest, TripDelayRequest, TripPayload, TripStatus, TripStatusRequest,
        },
        Page,
    },
};

pub const DEFAULT_TRIP_SORT: &str = "departureTime,asc";

/// Filters of `GET /trips/paged/search`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripFilter {
    pub search: String,
    pub status: Option<TripStatus>,
    /// Spring sort expression, e.g. `departureTime,desc`
    pub sort: Option<String>,
}

pub struct TripApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TripApi<'a> {
    /// Creates a new instance of [`TripApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, filter: &TripFilter, page: u32, size: u32) -> Result<Page<Trip>, Error> {
        let mut query: Query = Vec::new();
        push_opt(&mut query, "search", Some(filter.search.as_str()));
        push_opt(&mut query, "status", filter.status.as_ref().map(|s| s.as_str()));
        query.push(("page", page.to_string()));
        query.push(("size", size.to_string()));
        query.push((
            "sort",
            filter
                .sort
                .clone()
                .unwrap_or_else(|| DEFAULT_TRIP_SORT.to_string()),
        ));

        self.client.get_page("/trips/paged/search", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<Trip, Error> {
        self.client.get_json(&format!("/trips/{}", id), &[]).await
    }

    pub async fn create(&self, payload: &TripPayload) -> Result<Option<Trip>, Error> {
        self.client.post_json("/trips", payload).await
    }

    pub async fn update(&self, id: i64, payload: &TripPayload) -> Result<Option<Trip>, Error> {
        self.client.put_json(&format!("/trips/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/trips/{}", id)).await
    }

    pub async fn update_status(&self, id: i64, status: TripStatus) -> Result<Option<Trip>, Error> {
        self.client
            .put_json(&format!("/trips/{}/status", id), &TripStatusRequest { status })
            .await
    }

    pub async fn delay(&self, id: i64, request: &TripDelayRequest) -> Result<Option<Trip>, Error> {
        self.client
            .put_json(&format!("/trips/{}/delay", id), request)
            .await
    }

    pub async fn cancel(&self, id: i64, reason: Option<String>) -> Result<Option<Trip>, Error> {
        self.client
            .put_json(&format!("/trips/{}/cancel", id), &TripCancelRequest { reason })
            .await
    }
}
