use railway_admin::{
    api::{token::TokenStore, AuthApi},
    error::Error,
};
use railway_admin_test_utils::{
    constant::{TEST_EMAIL, TEST_PASSWORD},
    prelude::*,
};

use crate::util::{logged_out_client, test_client};

#[tokio::test]
/// Expect login to store both returned tokens
async fn login_stores_tokens() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_EMAIL, 1)
        .build()
        .await;
    let (client, tokens) = logged_out_client(&test);

    AuthApi::new(&client).login(TEST_EMAIL, TEST_PASSWORD).await?;

    assert_eq!(tokens.access_token().as_deref(), Some(TEST_ACCESS_TOKEN));
    assert_eq!(tokens.refresh_token().as_deref(), Some(TEST_REFRESH_TOKEN));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect rejected credentials to leave the store empty
async fn failed_login_stores_nothing() {
    let test = TestBuilder::new()
        .with_endpoint(
            "POST",
            "/auth/login",
            401,
            serde_json::json!({ "message": "Sai email hoặc mật khẩu" }),
            1,
        )
        .build()
        .await;
    let (client, tokens) = logged_out_client(&test);

    let result = AuthApi::new(&client).login(TEST_EMAIL, "wrong").await;

    assert!(matches!(result, Err(Error::Api { status: 401, .. })));
    assert!(!tokens.is_authenticated());
}

#[tokio::test]
/// Expect explicit refresh to send the `Refresh-Token` header and store the new token
async fn refresh_sends_refresh_token_header() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_refresh_endpoint(TEST_REFRESHED_TOKEN, 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    let token = AuthApi::new(&client).refresh().await?;

    assert_eq!(token, TEST_REFRESHED_TOKEN);
    assert_eq!(tokens.access_token().as_deref(), Some(TEST_REFRESHED_TOKEN));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect logout to clear local tokens
async fn logout_clears_tokens() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint("POST", "/auth/logout", &[], serde_json::json!({}), 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    AuthApi::new(&client).logout().await?;

    assert!(!tokens.is_authenticated());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect local tokens to be cleared even when the backend logout fails
async fn logout_clears_tokens_on_backend_failure() {
    let test = TestBuilder::new()
        .with_endpoint("POST", "/auth/logout", 500, serde_json::json!({}), 1)
        .build()
        .await;
    let (client, tokens) = test_client(&test);

    let result = AuthApi::new(&client).logout().await;

    assert!(result.is_err());
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}
