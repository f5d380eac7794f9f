use dioxus::prelude::*;

use crate::client::{
    components::auth::AuthLayout,
    routes::{
        auth::{Admin, Budgets, Dashboard, Forum, Goals, Profile, Transactions},
        AdminSetup, Login, NotFound, Register,
    },
};
use crate::model::auth::{Role, Session};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/secret-admin-setup")]
    AdminSetup {},

    #[layout(AuthLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/transactions")]
        Transactions {},

        #[route("/budgets")]
        Budgets {},

        #[route("/goals")]
        Goals {},

        #[route("/profile")]
        Profile {},

        #[route("/forum")]
        Forum {},

        #[route("/admin")]
        Admin {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Where logged in users land, and where under-privileged navigation is sent
    pub fn default_authenticated() -> Self {
        Route::Dashboard {}
    }

    /// Roles of which the session must hold at least one; empty means any logged in user
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::Admin {} => &[Role::Admin],
            _ => &[],
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Route::Login {} | Route::Register {} | Route::AdminSetup {} | Route::NotFound { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

/// Sidebar entries for `session`, with the admin panel on top for administrators
pub fn navigation(session: &Session) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            route: Route::Dashboard {},
            label: "Dashboard",
        },
        NavItem {
            route: Route::Transactions {},
            label: "Transactions",
        },
        NavItem {
            route: Route::Budgets {},
            label: "Budgets",
        },
        NavItem {
            route: Route::Goals {},
            label: "Goals",
        },
        NavItem {
            route: Route::Profile {},
            label: "Profile",
        },
        NavItem {
            route: Route::Forum {},
            label: "Forum",
        },
    ];

    if session.has_any_role(Route::Admin {}.required_roles()) {
        items.insert(
            0,
            NavItem {
                route: Route::Admin {},
                label: "Admin Panel",
            },
        );
    }

    items
}
