use std::sync::Arc;

use dioxus::prelude::*;
use railway_admin::{api::token::TokenStore, ApiClient, Config};

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    use_context_provider(|| ApiClient::new(&config, token_store()));

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Tokens survive page reloads in the browser, other targets keep them for the session only
fn token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(railway_admin::api::token::LocalStorageTokenStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(railway_admin::api::token::MemoryTokenStore::new())
    }
}
