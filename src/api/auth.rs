use dioxus_logger::tracing;
use reqwest::Method;

use crate::{
    api::ApiClient,
    error::Error,
    model::auth::{LoginRequest, TokenPair},
};

use super::check_status;

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    /// Creates a new instance of [`AuthApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Logs in with email & password and stores the returned token pair
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, Error> {
        let response = self
            .client
            .http
            .post(self.client.url("/auth/login"))
            .json(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let tokens = check_status(response).await?.json::<TokenPair>().await?;
        self.client.tokens.set_tokens(&tokens);

        tracing::info!("Logged in as {}", email.trim());

        Ok(tokens)
    }

    /// Exchanges the stored refresh token for a new access token, see [`ApiClient::refresh_access_token`]
    pub async fn refresh(&self) -> Result<String, Error> {
        self.client.refresh_access_token().await
    }

    /// Logs out on the backend, local tokens are cleared even when the backend call fails
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self
            .client
            .execute(Method::POST, "/auth/logout", None)
            .await;

        self.client.tokens.clear();

        if let Err(err) = &result {
            tracing::warn!("Logout request failed, local session cleared anyway: {}", err);
        }

        result
    }
}
