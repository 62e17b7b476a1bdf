use crate::{
    api::ApiClient,
    error::Error,
    model::train::{Train, TrainPayload},
};

pub struct TrainApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrainApi<'a> {
    /// Creates a new instance of [`TrainApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Train>, Error> {
        self.client.get_list("/trains", &[]).await
    }

    /// Trains currently in service, used by the trip and carriage forms
    pub async fn active(&self) -> Result<Vec<Train>, Error> {
        self.client.get_list("/trains/status/active", &[]).await
    }

    pub async fn get(&self, id: i64) -> Result<Train, Error> {
        self.client.get_json(&format!("/trains/{}", id), &[]).await
    }

    pub async fn create(&self, payload: &TrainPayload) -> Result<Option<Train>, Error> {
        self.client.post_json("/trains", payload).await
    }

    pub async fn update(&self, id: i64, payload: &TrainPayload) -> Result<Option<Train>, Error> {
        self.client.put_json(&format!("/trains/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/trains/{}", id)).await
    }
}
