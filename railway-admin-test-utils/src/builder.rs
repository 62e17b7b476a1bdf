//! Declarative setup of the mock backend.
//!
//! Endpoints are queued on the builder and registered on the mockito server during
//! [`TestBuilder::build`], in the order they were added.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN},
    setup::TestSetup,
};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for a mock ticketing backend
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn query_matcher(query: &[(&str, &str)]) -> Matcher {
    if query.is_empty() {
        return Matcher::Any;
    }

    Matcher::AllOf(
        query
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
        }
    }

    /// Add an endpoint answering `status` with a JSON `body` to any caller.
    pub fn with_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let (method, path) = (method.to_string(), path.to_string());

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock(method.as_str(), path.as_str())
                .match_query(Matcher::Any)
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add an endpoint that only answers requests carrying `Bearer <token>`.
    ///
    /// # Arguments
    /// - `query` - Query parameters the request must carry, empty to accept any query
    pub fn with_authorized_endpoint(
        mut self,
        method: &str,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let (method, path, token) = (method.to_string(), path.to_string(), token.to_string());
        let query = query_matcher(query);

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock(method.as_str(), path.as_str())
                .match_header("authorization", bearer(&token).as_str())
                .match_query(query)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add an authorized endpoint using the default test access token.
    pub fn with_api_endpoint(
        self,
        method: &str,
        path: &str,
        query: &[(&str, &str)],
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_authorized_endpoint(
            method,
            path,
            TEST_ACCESS_TOKEN,
            query,
            body,
            expected_requests,
        )
    }

    /// Add an endpoint answering 401 to requests with `Bearer <token>`, or to any request when
    /// `token` is `None`.
    pub fn with_unauthorized_endpoint(
        mut self,
        method: &str,
        path: &str,
        token: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        let (method, path) = (method.to_string(), path.to_string());
        let auth = match token {
            Some(token) => Matcher::Exact(bearer(token)),
            None => Matcher::Any,
        };

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock(method.as_str(), path.as_str())
                .match_header("authorization", auth)
                .match_query(Matcher::Any)
                .with_status(401)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Unauthorized"}"#)
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add `POST /auth/refresh` exchanging the test refresh token for `new_token`.
    pub fn with_refresh_endpoint(mut self, new_token: &str, expected_requests: usize) -> Self {
        let body = serde_json::json!({ "token": new_token });

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock("POST", "/auth/refresh")
                .match_header("refresh-token", TEST_REFRESH_TOKEN)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add `POST /auth/refresh` failing with `status`.
    pub fn with_failed_refresh_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.mock_builders.push(Box::new(move |server| {
            server
                .mock("POST", "/auth/refresh")
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Refresh token expired"}"#)
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add `POST /auth/login` accepting `email` and returning the default test tokens.
    pub fn with_login_endpoint(mut self, email: &str, expected_requests: usize) -> Self {
        let email = email.to_string();
        let body = serde_json::json!({
            "token": TEST_ACCESS_TOKEN,
            "refreshToken": TEST_REFRESH_TOKEN,
        });

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock("POST", "/auth/login")
                .match_body(Matcher::PartialJson(serde_json::json!({ "email": email })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add an authorized endpoint that requires a JSON request body containing `expected_body`.
    pub fn with_json_body_endpoint(
        mut self,
        method: &str,
        path: &str,
        expected_body: Value,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        let (method, path) = (method.to_string(), path.to_string());

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock(method.as_str(), path.as_str())
                .match_header("authorization", bearer(TEST_ACCESS_TOKEN).as_str())
                .match_body(Matcher::PartialJson(expected_body))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(response.to_string())
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Add a custom mock endpoint.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    pub async fn build(self) -> TestSetup {
        let mut setup = TestSetup::new().await;

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        setup
    }
}
