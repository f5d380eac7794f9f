use dioxus::prelude::*;

use crate::client::{components::BudgetwiseTitle, router::Route};

/// Top bar of the signed-out pages
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                BudgetwiseTitle {}
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    li {
                        Link {
                            to: Route::Login {},
                            class: "btn btn-ghost",
                            "Login"
                        }
                    }
                    li {
                        Link {
                            to: Route::Register {},
                            class: "btn btn-primary",
                            "Register"
                        }
                    }
                }
            }
        }
    }
}
