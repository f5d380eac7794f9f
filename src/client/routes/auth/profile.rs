use std::time::Duration;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures_timer::Delay;

use crate::client::{
    components::{page::PageHeader, Loading},
    store::session::{SessionSlot, SessionStore},
    util::{load_into, use_authorized_api, use_view_resource},
    view::{
        profile::{ProfileForm, SAVED_NOTICE_MS},
        LoadPhase,
    },
};
use crate::model::profile;

#[component]
pub fn Profile() -> Element {
    let api = use_authorized_api();
    let session = use_context::<Signal<SessionStore>>();
    let stored = use_view_resource::<Option<profile::Profile>>();
    let mut form = use_signal(ProfileForm::default);
    let mut notice = use_signal(|| None::<String>);
    let mut form_error = use_signal(|| None::<String>);

    use_effect({
        let api = api.clone();
        move || {
            let Some(api) = api.clone() else {
                return;
            };

            load_into(stored, async move { api.get_profile().await });
        }
    });

    // Fill the form whenever a profile arrives
    use_effect(move || {
        if let Some(loaded) = stored.read().data() {
            form.set(ProfileForm::from_profile(loaded.as_ref()));
        }
    });

    let save = use_callback(move |_: ()| {
        let Some(api) = api.clone() else {
            return;
        };
        let profile = match form.read().to_profile() {
            Ok(profile) => profile,
            Err(e) => {
                form_error.set(Some(e.user_message()));
                return;
            }
        };
        form_error.set(None);
        let mut stored = stored;

        spawn(async move {
            match api.update_profile(&profile).await {
                Ok(()) => {
                    stored.write().update_local(|current| *current = Some(profile));
                    notice.set(Some("Profile updated successfully!".to_string()));

                    Delay::new(Duration::from_millis(SAVED_NOTICE_MS)).await;
                    notice.set(None);
                }
                Err(e) => tracing::error!("{}", e),
            }
        });
    });

    let account = session.current_session();
    let resource = stored.read();
    let current = form.read().clone();

    rsx!(
        Title { "Profile | BudgetWise" }
        PageHeader { title: "Profile" }

        if let Some(account) = account {
            div { class: "card shadow-sm bg-base-100 mb-6",
                div { class: "card-body",
                    h3 { class: "card-title", "Account" }
                    p { "Username: " span { class: "font-semibold", {account.username()} } }
                    p { "Email: " span { class: "font-semibold", {account.email()} } }
                    div { class: "flex gap-2",
                        for role in account.roles().iter() {
                            span { class: "badge badge-primary", {role.label()} }
                        }
                    }
                }
            }
        }

        if resource.is_pending() {
            Loading {}
        } else {
            div { class: "card shadow-sm bg-base-100",
                form { class: "card-body gap-4",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        save.call(());
                    },
                    h3 { class: "card-title", "Financial Profile" }
                    if resource.phase() == LoadPhase::Failed {
                        div { class: "alert alert-warning", "Could not load your saved profile." }
                    }
                    if let Some(message) = notice() {
                        div { class: "alert alert-success", "{message}" }
                    }
                    if let Some(message) = form_error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    label { class: "flex flex-col gap-1",
                        "Monthly Income"
                        input {
                            class: "input",
                            r#type: "number",
                            step: "0.01",
                            value: "{current.monthly_income}",
                            oninput: move |e| form.write().monthly_income = e.value(),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        "Current Savings"
                        input {
                            class: "input",
                            r#type: "number",
                            step: "0.01",
                            value: "{current.current_savings}",
                            oninput: move |e| form.write().current_savings = e.value(),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        "Target Monthly Expense"
                        input {
                            class: "input",
                            r#type: "number",
                            step: "0.01",
                            value: "{current.target_expense}",
                            oninput: move |e| form.write().target_expense = e.value(),
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save Profile" }
                }
            }
        }
    )
}
