use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaWallet;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BudgetwiseTitle() -> Element {
    rsx!(
        Link {
            to: Route::default_authenticated(),
            div { class: "flex items-center gap-2",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaWallet
                }
                p { class: "text-xl font-semibold",
                    "BudgetWise"
                }
            }
        }
    )
}
