//! Shares one [`api::HttpClient`] with every view.

use api::HttpClient;
use dioxus::prelude::*;

/// Get the shared API client.
pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

#[component]
pub fn ApiProvider(base_url: String, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!(%base_url, "using API origin");
        HttpClient::new(base_url.clone())
    });

    rsx! {
        {children}
    }
}
