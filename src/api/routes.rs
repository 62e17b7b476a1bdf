use crate::{
    api::ApiClient,
    error::Error,
    model::route::{Route, RoutePayload, RouteStop},
};

pub struct RouteApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RouteApi<'a> {
    /// Creates a new instance of [`RouteApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Route>, Error> {
        self.client.get_list("/routes", &[]).await
    }

    /// Routes including their ordered stops
    pub async fn with_stations(&self) -> Result<Vec<Route>, Error> {
        self.client.get_list("/routes/with-stations", &[]).await
    }

    pub async fn stations(&self, id: i64) -> Result<Vec<RouteStop>, Error> {
        let mut stops: Vec<RouteStop> = self
            .client
            .get_list(&format!("/routes/{}/stations", id), &[])
            .await?;
        stops.sort_by_key(|s| s.stop_order);

        Ok(stops)
    }

    pub async fn get(&self, id: i64) -> Result<Route, Error> {
        self.client.get_json(&format!("/routes/{}", id), &[]).await
    }

    pub async fn create(&self, payload: &RoutePayload) -> Result<Option<Route>, Error> {
        self.client.post_json("/routes", payload).await
    }

    pub async fn update(&self, id: i64, payload: &RoutePayload) -> Result<Option<Route>, Error> {
        self.client.put_json(&format!("/routes/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/routes/{}", id)).await
    }
}
