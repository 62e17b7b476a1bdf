use crate::{
    api::ApiClient,
    error::Error,
    model::{
        station::{Station, StationPayload, StationStatus},
        Page,
    },
};

/// Filters of the station page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationFilter {
    pub keyword: String,
    pub status: Option<StationStatus>,
}

pub struct StationApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StationApi<'a> {
    /// Creates a new instance of [`StationApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Station>, Error> {
        self.client.get_list("/stations", &[]).await
    }

    /// Stations matching both the keyword and the status
    ///
    /// `/stations/search` has no status parameter, so a status combined with a keyword is
    /// applied to the search results.
    pub async fn filtered(&self, filter: &StationFilter) -> Result<Vec<Station>, Error> {
        let keyword = filter.keyword.trim();

        match (keyword.is_empty(), &filter.status) {
            (true, None) => self.list().await,
            (true, Some(status)) => self.by_status(status).await,
            (false, status) => {
                let mut stations = self.search(keyword).await?;
                if let Some(status) = status {
                    stations.retain(|s| s.status == *status);
                }
                Ok(stations)
            }
        }
    }

    pub async fn paged(&self, page: u32, size: u32) -> Result<Page<Station>, Error> {
        self.client
            .get_page(
                "/stations/paged",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    pub async fn by_status(&self, status: &StationStatus) -> Result<Vec<Station>, Error> {
        self.client
            .get_list(&format!("/stations/status/{}", status.as_str()), &[])
            .await
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Station>, Error> {
        self.client
            .get_list("/stations/search", &[("keyword", keyword.trim().to_string())])
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Station, Error> {
        self.client.get_json(&format!("/stations/{}", id), &[]).await
    }

    pub async fn create(&self, payload: &StationPayload) -> Result<Option<Station>, Error> {
        self.client.post_json("/stations", payload).await
    }

    pub async fn update(&self, id: i64, payload: &StationPayload) -> Result<Option<Station>, Error> {
        self.client
            .put_json(&format!("/stations/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/stations/{}", id)).await
    }
}
