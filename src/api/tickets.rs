use crate::{
    api::{push_opt, ApiClient, Query},
    error::Error,
    model::{ticket::{Ticket, TicketStatus}, Page},
};

/// Filters of `GET /tickets`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    /// Ticket code, passenger name or identity card
    pub search: String,
}

pub struct TicketApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TicketApi<'a> {
    /// Creates a new instance of [`TicketApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &TicketFilter, page: u32, size: u32) -> Result<Page<Ticket>, Error> {
        let mut query: Query = Vec::new();
        push_opt(&mut query, "status", filter.status.as_ref().map(|s| s.as_str()));
        push_opt(&mut query, "search", Some(filter.search.as_str()));
        query.push(("page", page.to_string()));
        query.push(("size", size.to_string()));

        self.client.get_page("/tickets", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<Ticket, Error> {
        self.client.get_json(&format!("/tickets/{}", id), &[]).await
    }
}
