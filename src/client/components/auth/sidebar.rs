use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBullseye, FaChartPie, FaComments, FaMoneyBillWave, FaUser, FaUserShield, FaWallet,
};
use dioxus_free_icons::Icon;

use crate::client::{
    router::{navigation, Route},
    store::session::{SessionSlot, SessionStore},
};

#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Signal<SessionStore>>();
    let current = use_route::<Route>();

    let Some(session) = session.current_session() else {
        return rsx!();
    };

    let initial = session.initial();
    let role = session.primary_role();

    rsx!(
        aside { class: "w-56 min-h-screen bg-base-200 p-4 flex flex-col",
            ul { class: "menu gap-1 flex-1",
                for item in navigation(&session) {
                    li {
                        Link {
                            to: item.route.clone(),
                            class: link_class(&item.route, &current),
                            NavIcon { route: item.route.clone() }
                            "{item.label}"
                        }
                    }
                }
            }
            div { class: "flex items-center gap-3 pt-4 border-t border-base-300",
                div { class: "avatar avatar-placeholder",
                    div { class: "bg-primary text-primary-content w-9 rounded-full",
                        span { "{initial}" }
                    }
                }
                div { class: "flex flex-col",
                    span { class: "font-semibold text-sm", {session.username()} }
                    span { class: "text-xs text-base-content/70 capitalize", {role.label()} }
                }
            }
        }
    )
}

fn link_class(route: &Route, current: &Route) -> &'static str {
    if route == current {
        "menu-active flex gap-2"
    } else {
        "flex gap-2"
    }
}

#[component]
fn NavIcon(route: Route) -> Element {
    match route {
        Route::Admin {} => rsx!(Icon { width: 16, height: 16, icon: FaUserShield }),
        Route::Dashboard {} => rsx!(Icon { width: 16, height: 16, icon: FaChartPie }),
        Route::Transactions {} => rsx!(Icon { width: 16, height: 16, icon: FaMoneyBillWave }),
        Route::Budgets {} => rsx!(Icon { width: 16, height: 16, icon: FaWallet }),
        Route::Goals {} => rsx!(Icon { width: 16, height: 16, icon: FaBullseye }),
        Route::Profile {} => rsx!(Icon { width: 16, height: 16, icon: FaUser }),
        Route::Forum {} => rsx!(Icon { width: 16, height: 16, icon: FaComments }),
        _ => rsx!(),
    }
}
