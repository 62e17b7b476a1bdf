use crate::{
    api::{push_opt, ApiClient, Query},
    error::Error,
    model::refund::{RefundApproval, RefundRejection, RefundRequest, RefundStatus},
};

pub struct RefundApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RefundApi<'a> {
    /// Creates a new instance of [`RefundApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, status: Option<&RefundStatus>) -> Result<Vec<RefundRequest>, Error> {
        let mut query: Query = Vec::new();
        push_opt(&mut query, "status", status.map(|s| s.as_str()));

        self.client.get_list("/refunds/requests", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<RefundRequest, Error> {
        self.client.get_json(&format!("/refunds/{}", id), &[]).await
    }

    pub async fn approve(&self, id: i64, admin_note: Option<String>) -> Result<Option<RefundRequest>, Error> {
        self.client
            .put_json(
                &format!("/refunds/{}/approve", id),
                &RefundApproval { admin_note },
            )
            .await
    }

    pub async fn reject(&self, id: i64, reason: &str) -> Result<Option<RefundRequest>, Error> {
        self.client
            .put_json(
                &format!("/refunds/{}/reject", id),
                &RefundRejection {
                    reason: reason.trim().to_string(),
                },
            )
            .await
    }
}
