//! Navigation gating for protected routes.
//!
//! This is a convenience gate for the UI, not a security boundary: every request is still
//! authorized by the backend against the bearer token.

use crate::client::{router::Route, store::session::SessionState};
use crate::model::auth::Role;

#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// The persisted session has not been read yet; show a placeholder and wait
    Loading,
    RedirectToLogin,
    /// Logged in but lacking every required role
    RedirectToDefault,
    Render,
}

impl GuardDecision {
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            GuardDecision::RedirectToLogin => Some(Route::Login {}),
            GuardDecision::RedirectToDefault => Some(Route::default_authenticated()),
            GuardDecision::Loading | GuardDecision::Render => None,
        }
    }
}

/// Decides what a navigation to a protected view with `required` roles should do.
///
/// An empty `required` slice admits any logged in user.
pub fn evaluate(state: &SessionState, required: &[Role]) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Loading,
        SessionState::Absent => GuardDecision::RedirectToLogin,
        SessionState::Present(session) if !session.has_any_role(required) => {
            GuardDecision::RedirectToDefault
        }
        SessionState::Present(_) => GuardDecision::Render,
    }
}

/// Decides what a navigation to `route` should do. Public routes always render.
pub fn evaluate_route(state: &SessionState, route: &Route) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render;
    }

    evaluate(state, route.required_roles())
}
