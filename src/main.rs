#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing::{self, Level};
use railway_admin::Config;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error, falling back to the default API URL: {}", e);
            Config::default()
        }
    };

    tracing::info!("Using API at {}", config.api_base_url);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
