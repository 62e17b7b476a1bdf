//! Client for the ticketing backend's REST API.
//!
//! Every resource module wraps a borrowed [`ApiClient`] the same way, e.g.
//! `TrainApi::new(&client).list().await`. All requests go through [`ApiClient::send`], which
//! attaches the bearer token and performs the single refresh-and-retry on a 401.

pub mod auth;
pub mod bookings;
pub mod carriages;
pub mod dashboard;
pub mod refunds;
pub mod routes;
pub mod stations;
pub mod tickets;
pub mod token;
pub mod trains;
pub mod trips;
pub mod users;

use std::sync::Arc;

use dioxus_logger::tracing;
use futures::lock::Mutex;
use reqwest::{Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    error::{auth::AuthError, Error},
    model::{api::ErrorDto, auth::RefreshResponse, Page},
};

use self::token::TokenStore;

pub use self::{
    auth::AuthApi, bookings::BookingApi, carriages::CarriageApi, dashboard::DashboardApi,
    refunds::RefundApi, routes::RouteApi, stations::StationApi, tickets::TicketApi,
    trains::TrainApi, trips::TripApi, users::UserApi,
};

/// Header carrying the refresh token on `POST /auth/refresh`
pub const REFRESH_TOKEN_HEADER: &str = "Refresh-Token";

/// Query parameters of a request, values already rendered as strings
pub type Query<'a> = Vec<(&'a str, String)>;

/// Shared HTTP client for every admin page
///
/// Cheap to clone, clones share the HTTP connection pool and the token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    /// Held while a refresh is in flight, concurrent 401s wait on it
    refreshing: Arc<Mutex<()>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl ApiClient {
    /// Creates a new instance of [`ApiClient`]
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            tokens,
            refreshing: Arc::new(Mutex::new(())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends an authenticated request
    ///
    /// - Fails with [`AuthError::MissingToken`] before any I/O when no access token is stored
    /// - On a 401, refreshes the access token and retries the request exactly once
    /// - A second 401 ends the session with [`AuthError::SessionExpired`]
    /// - Any other non-2xx status becomes [`Error::Api`] with the best-effort server message
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<Response, Error> {
        let token = self.tokens.access_token().ok_or(AuthError::MissingToken)?;

        tracing::debug!("{} {}", method, path);

        let response = self
            .request(method.clone(), path, query, body, &token)
            .send()
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        tracing::warn!("{} {} returned 401, refreshing access token", method, path);

        let token = self.refresh_rejected_token(&token).await?;

        let response = self
            .request(method.clone(), path, query, body, &token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::error!(
                "{} {} still unauthorized after refreshing the access token",
                method,
                path
            );
            self.tokens.clear();
            return Err(AuthError::SessionExpired.into());
        }

        check_status(response).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        token: &str,
    ) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, self.url(path)).bearer_auth(token);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        request
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// Any failure clears both stored tokens, the caller is expected to send the user to login.
    pub async fn refresh_access_token(&self) -> Result<String, Error> {
        let _refreshing = self.refreshing.lock().await;
        self.refresh_locked().await
    }

    /// Replaces an access token the backend rejected with 401
    ///
    /// Requests failing together share one refresh. Whoever takes the lock first refreshes,
    /// the others find a token different from the one they sent and reuse it.
    async fn refresh_rejected_token(&self, rejected: &str) -> Result<String, Error> {
        let _refreshing = self.refreshing.lock().await;

        if let Some(current) = self.tokens.access_token().filter(|t| t != rejected) {
            tracing::debug!("Access token already refreshed by a concurrent request");
            return Ok(current);
        }

        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<String, Error> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            self.tokens.clear();
            return Err(AuthError::MissingRefreshToken.into());
        };

        match self.request_refresh(&refresh_token).await {
            Ok(refreshed) => {
                self.tokens.set_access_token(&refreshed.token);
                if let Some(rotated) = &refreshed.refresh_token {
                    self.tokens.set_refresh_token(rotated);
                }

                Ok(refreshed.token)
            }
            Err(reason) => {
                tracing::error!("Failed to refresh access token: {}", reason);
                self.tokens.clear();

                Err(AuthError::RefreshFailed(reason).into())
            }
        }
    }

    async fn request_refresh(&self, refresh_token: &str) -> Result<RefreshResponse, String> {
        let response = self
            .http
            .post(self.url("/auth/refresh"))
            .header(REFRESH_TOKEN_HEADER, refresh_token)
            .send()
            .await
            .map_err(|e| format!("failed to send request: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("server responded with status {}", status.as_u16()));
        }

        let refreshed = response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| format!("failed to parse refresh response: {}", e))?;

        if refreshed.token.is_empty() {
            return Err("server returned an empty access token".to_string());
        }

        Ok(refreshed)
    }

    /// GET a JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let response = self.send(Method::GET, path, query, None).await?;
        parse_json(response).await
    }

    /// GET a JSON array, a body of any other shape is a malformed response
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let value: serde_json::Value = self.get_json(path, query).await?;

        if !value.is_array() {
            return Err(Error::MalformedResponse(format!(
                "expected an array from {}",
                path
            )));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// GET a Spring page envelope
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>, Error> {
        let value: serde_json::Value = self.get_json(path, query).await?;
        Page::from_value(value)
    }

    /// POST a JSON body
    ///
    /// Returns `None` when the backend acknowledged the mutation with an empty body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, &[], Some(&body)).await?;
        parse_optional_json(response).await
    }

    /// PUT a JSON body, `None` for an empty response like [`ApiClient::post_json`]
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PUT, path, &[], Some(&body)).await?;
        parse_optional_json(response).await
    }

    /// Sends a request whose response body is not needed
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(), Error> {
        self.send(method, path, &[], body).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute(Method::DELETE, path, None).await
    }

    /// POST a JSON body and return the raw response bytes, used for file downloads
    pub async fn post_for_bytes<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, Error> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, &[], Some(&body)).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(Error::Api {
        status: status.as_u16(),
        message: extract_error_message(&text),
    })
}

/// Best-effort extraction of a human readable message from an error body
pub fn extract_error_message(body: &str) -> String {
    if let Ok(dto) = serde_json::from_str::<ErrorDto>(body) {
        if let Some(message) = dto.message() {
            return message.to_string();
        }
    }

    body.trim().to_string()
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let url = response.url().path().to_string();

    parse_optional_json(response)
        .await?
        .ok_or_else(|| Error::MalformedResponse(format!("empty response from {}", url)))
}

/// Some mutation endpoints answer 200/204 with no body
async fn parse_optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>, Error> {
    let text = response.text().await?;

    if text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&text)?))
}

/// Appends a query parameter only when it carries a non-empty value
pub(crate) fn push_opt<'a>(query: &mut Query<'a>, key: &'a str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        query.push((key, value.to_string()));
    }
}
