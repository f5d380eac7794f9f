use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{
    components::BudgetwiseTitle,
    router::Route,
    store::session::{SessionSlot, SessionStore},
};

#[component]
pub fn AuthNavbar() -> Element {
    let mut session = use_context::<Signal<SessionStore>>();
    let username = session
        .current_session()
        .map(|session| session.username().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                BudgetwiseTitle {}
            }
            div {
                class: "navbar-end flex gap-4",
                p { class: "text-sm",
                    "Signed in as "
                    span { class: "font-semibold", "{username}" }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| {
                        session.logout();
                        navigator().replace(Route::Login {});
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Logout"
                }
            }
        }
    }
}
