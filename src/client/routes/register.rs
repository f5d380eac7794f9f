use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{Navbar, Page},
    router::Route,
    store::session::{SessionSlot, SessionStore},
};
use crate::model::auth::RegistrationRole;

#[component]
pub fn Register() -> Element {
    rsx!(
        Title { "Register | BudgetWise" }
        Meta {
            name: "description",
            content: "Create a BudgetWise account."
        }
        Navbar {}
        Page { class: "flex items-center justify-center",
            AccountForm { role: RegistrationRole::User, heading: "Create your account" }
        }
    )
}

/// Sign-up form requesting `role`. On success the user is sent to the login page.
#[component]
pub fn AccountForm(role: RegistrationRole, heading: &'static str) -> Element {
    let session = use_context::<Signal<SessionStore>>();
    let api = use_context::<ApiClient>();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            let result = session
                .register(&api, &username(), &email(), &password(), &[role])
                .await;

            submitting.set(false);
            match result {
                Ok(()) => {
                    navigator().push(Route::Login {});
                }
                Err(e) => {
                    tracing::debug!(?role, "Registration rejected");
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            form { class: "card-body flex flex-col gap-3",
                onsubmit: on_submit,
                h2 { class: "card-title", "{heading}" }
                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                input {
                    class: "input w-full",
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "input w-full",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    class: "input w-full",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "Register"
                }
                p { class: "text-sm text-center",
                    "Already registered? "
                    Link { to: Route::Login {}, class: "link", "Login" }
                }
            }
        }
    )
}
