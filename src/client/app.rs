use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, AppTransport},
    config::Config,
    router::Route,
    store::{persistence::platform_persistence, session::SessionStore},
};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}, falling back to defaults", e);
            Config::default()
        }
    });

    use_context_provider(|| ApiClient::new(AppTransport::default(), config.api_url.clone()));
    let mut session = use_context_provider(|| {
        Signal::new(SessionStore::new(platform_persistence(&config.storage_key)))
    });
    use_context_provider(|| config.clone());

    // Read the persisted session once the tree is mounted
    use_effect(move || {
        session.write().hydrate();
    });

    rsx! {
        Router::<Route> {}
    }
}
