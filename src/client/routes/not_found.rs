use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;

/// Any unknown path lands on the dashboard, which in turn sends anonymous visitors to login
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");

    use_effect(move || {
        navigator().replace(Route::default_authenticated());
    });

    rsx!()
}
