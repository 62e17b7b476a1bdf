use crate::{
    api::ApiClient,
    error::Error,
    model::carriage::{Carriage, CarriagePayload, Seat, SeatPayload},
};

pub struct CarriageApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CarriageApi<'a> {
    /// Creates a new instance of [`CarriageApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_with_seats(&self) -> Result<Vec<Carriage>, Error> {
        self.client.get_list("/carriages/with-seats", &[]).await
    }

    pub async fn get_with_seats(&self, id: i64) -> Result<Carriage, Error> {
        self.client
            .get_json(&format!("/carriages/{}/with-seats", id), &[])
            .await
    }

    pub async fn create(&self, payload: &CarriagePayload) -> Result<Option<Carriage>, Error> {
        self.client.post_json("/carriages", payload).await
    }

    pub async fn update(&self, id: i64, payload: &CarriagePayload) -> Result<Option<Carriage>, Error> {
        self.client
            .put_json(&format!("/carriages/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/carriages/{}", id)).await
    }

    pub async fn create_seat(&self, payload: &SeatPayload) -> Result<Option<Seat>, Error> {
        self.client.post_json("/seats", payload).await
    }

    pub async fn update_seat(&self, id: i64, payload: &SeatPayload) -> Result<Option<Seat>, Error> {
        self.client.put_json(&format!("/seats/{}", id), payload).await
    }

    pub async fn delete_seat(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/seats/{}", id)).await
    }
}
