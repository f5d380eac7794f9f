use dioxus::prelude::*;

use crate::client::{
    components::{
        auth::{AuthNavbar, Sidebar},
        Loading,
    },
    guard::{self, GuardDecision},
    router::Route,
    store::session::{SessionSlot, SessionStore},
};

/// Wraps every protected view: decides whether it may render and redirects otherwise
#[component]
pub fn AuthLayout() -> Element {
    let session = use_context::<Signal<SessionStore>>();
    let route = use_route::<Route>();

    let decision = guard::evaluate_route(&session.session_state(), &route);

    use_effect(use_reactive((&decision,), |(decision,)| {
        if let Some(target) = decision.redirect_target() {
            navigator().replace(target);
        }
    }));

    match decision {
        GuardDecision::Render => rsx!(
            AuthNavbar {}
            div { class: "flex pt-[64px]",
                Sidebar {}
                main { class: "flex-1 p-6 min-h-screen",
                    Outlet::<Route> {}
                }
            }
        ),
        GuardDecision::Loading => rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                Loading { label: "Loading..." }
            }
        ),
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToDefault => rsx!(),
    }
}
