use std::sync::Arc;

use railway_admin::{
    api::token::{MemoryTokenStore, TokenStore},
    ApiClient, Config,
};
use railway_admin_test_utils::{
    constant::{TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN},
    TestSetup,
};

/// Client pointed at the mock backend with both test tokens stored
pub fn test_client(setup: &TestSetup) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::with_tokens(
        TEST_ACCESS_TOKEN,
        TEST_REFRESH_TOKEN,
    ));

    (client_with_store(setup, tokens.clone()), tokens)
}

/// Client pointed at the mock backend with an empty token store
pub fn logged_out_client(setup: &TestSetup) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::new());

    (client_with_store(setup, tokens.clone()), tokens)
}

fn client_with_store(setup: &TestSetup, tokens: Arc<MemoryTokenStore>) -> ApiClient {
    let config = Config {
        api_base_url: setup.url(),
    };
    let store: Arc<dyn TokenStore> = tokens;

    ApiClient::new(&config, store)
}
