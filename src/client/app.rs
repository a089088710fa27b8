use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{api::ApiClient, config::Config, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("{}; falling back to same-origin requests", e);
            Config::default()
        });

        tracing::info!(backend_url = %config.backend_url, "Starting CutCraft Studio");

        ApiClient::new(&config)
    });

    rsx!(
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    )
}
