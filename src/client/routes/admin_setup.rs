use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, Page},
    routes::AccountForm,
};
use crate::model::auth::RegistrationRole;

/// Unlisted page that registers an administrator account. The backend decides whether the
/// role is granted.
#[component]
pub fn AdminSetup() -> Element {
    rsx!(
        Title { "Admin Setup | BudgetWise" }
        Navbar {}
        Page { class: "flex items-center justify-center",
            AccountForm { role: RegistrationRole::Admin, heading: "Register an administrator" }
        }
    )
}
