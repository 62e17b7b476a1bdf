//! Authenticated fetch with a single refresh-and-retry on 401.

use railway_admin::{
    api::{token::TokenStore, TrainApi},
    error::{auth::AuthError, Error},
};
use railway_admin_test_utils::prelude::*;

use crate::util::{logged_out_client, test_client};

#[tokio::test]
/// Expect the bearer token to be attached and no refresh on success
async fn attaches_bearer_token() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/trains",
            &[],
            serde_json::json!([factory::train(1, "active")]),
            1,
        )
        .with_refresh_endpoint(TEST_REFRESHED_TOKEN, 0)
        .build()
        .await;
    let (client, _) = test_client(&test);

    let trains = TrainApi::new(&client).list().await?;

    assert_eq!(trains.len(), 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a 401 to trigger one refresh, store the new token and retry once
async fn refreshes_and_retries_once_on_401() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_unauthorized_endpoint("GET", "/trains", Some(TEST_ACCESS_TOKEN), 1)
        .with_refresh_endpoint(TEST_REFRESHED_TOKEN, 1)
        .with_authorized_endpoint(
            "GET",
            "/trains",
            TEST_REFRESHED_TOKEN,
            &[],
            serde_json::json!([factory::train(1, "active"), factory::train(2, "maintenance")]),
            1,
        )
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    let trains = TrainApi::new(&client).list().await?;

    assert_eq!(trains.len(), 2);
    assert_eq!(tokens.access_token().as_deref(), Some(TEST_REFRESHED_TOKEN));
    assert_eq!(tokens.refresh_token().as_deref(), Some(TEST_REFRESH_TOKEN));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a second 401 after refreshing to end the session instead of looping
async fn never_refreshes_twice() {
    let test = TestBuilder::new()
        .with_unauthorized_endpoint("GET", "/trains", None, 2)
        .with_refresh_endpoint(TEST_REFRESHED_TOKEN, 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    let result = TrainApi::new(&client).list().await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::SessionExpired))
    ));
    assert!(!tokens.is_authenticated());
    test.assert_mocks();
}

#[tokio::test]
/// Expect a failed refresh to clear both tokens and skip the retry
async fn failed_refresh_clears_session() {
    let test = TestBuilder::new()
        .with_unauthorized_endpoint("GET", "/trains", None, 1)
        .with_failed_refresh_endpoint(403, 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    let result = TrainApi::new(&client).list().await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::RefreshFailed(_)))
    ));
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
    test.assert_mocks();
}

#[tokio::test]
/// Expect an immediate rejection without any request when no token is stored
async fn missing_token_fails_before_request() {
    let test = TestBuilder::new()
        .with_endpoint("GET", "/trains", 200, serde_json::json!([]), 0)
        .build()
        .await;
    let (client, _) = logged_out_client(&test);

    let result = TrainApi::new(&client).list().await;

    assert!(matches!(result, Err(Error::Auth(AuthError::MissingToken))));
    test.assert_mocks();
}

#[tokio::test]
/// Expect a non-2xx response to carry the status and the server's message
async fn surfaces_server_error_message() {
    let test = TestBuilder::new()
        .with_endpoint(
            "DELETE",
            "/trains/3",
            409,
            serde_json::json!({ "message": "Tàu đang có chuyến chạy, không thể xóa" }),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = TrainApi::new(&client).delete(3).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Tàu đang có chuyến chạy, không thể xóa");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
    test.assert_mocks();
}

#[tokio::test]
/// Expect a list endpoint returning an object to be reported as malformed
async fn rejects_non_array_list() {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/trains",
            &[],
            serde_json::json!({ "trains": [] }),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = TrainApi::new(&client).list().await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
/// Expect requests rejected together to share a single refresh
async fn concurrent_401s_share_one_refresh() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_unauthorized_endpoint("GET", "/trains", Some(TEST_ACCESS_TOKEN), 3)
        .with_refresh_endpoint(TEST_REFRESHED_TOKEN, 1)
        .with_authorized_endpoint(
            "GET",
            "/trains",
            TEST_REFRESHED_TOKEN,
            &[],
            serde_json::json!([factory::train(1, "active")]),
            3,
        )
        .build()
        .await;
    let (client, tokens) = test_client(&test);
    let api = TrainApi::new(&client);

    let (a, b, c) = tokio::join!(api.list(), api.list(), api.list());

    assert_eq!(a?.len(), 1);
    assert_eq!(b?.len(), 1);
    assert_eq!(c?.len(), 1);
    assert_eq!(tokens.access_token().as_deref(), Some(TEST_REFRESHED_TOKEN));
    assert_eq!(tokens.refresh_token().as_deref(), Some(TEST_REFRESH_TOKEN));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed refresh to be attempted once even when several requests were rejected
async fn concurrent_401s_do_not_retry_failed_refresh() {
    let test = TestBuilder::new()
        .with_unauthorized_endpoint("GET", "/trains", None, 3)
        .with_failed_refresh_endpoint(403, 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);
    let api = TrainApi::new(&client);

    let (a, b, c) = tokio::join!(api.list(), api.list(), api.list());

    for result in [a, b, c] {
        assert!(matches!(result, Err(Error::Auth(_))));
    }
    assert!(!tokens.is_authenticated());
    test.assert_mocks();
}

#[tokio::test]
/// Expect a GET answered with an empty body to be reported as malformed
async fn rejects_empty_get_body() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/trains/3")
                .with_status(200)
                .with_body("")
                .expect(1)
                .create()
        })
        .build()
        .await;
    let (client, _) = test_client(&test);

    let result = TrainApi::new(&client).get(3).await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
    test.assert_mocks();
}
