use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    components::{Navbar, Page},
    router::Route,
    store::session::{SessionSlot, SessionStore},
};

#[component]
pub fn Login() -> Element {
    let session = use_context::<Signal<SessionStore>>();
    let api = use_context::<ApiClient>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if session.current_session().is_some() {
            navigator().replace(Route::default_authenticated());
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut session = session;

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match session.login(&api, &username(), &password()).await {
                Ok(_) => {
                    navigator().replace(Route::default_authenticated());
                }
                Err(e) => error.set(Some(e.user_message())),
            }

            submitting.set(false);
        });
    };

    rsx!(
        Title { "Login | BudgetWise" }
        Meta {
            name: "description",
            content: "Sign in to BudgetWise to track spending, budgets and savings goals."
        }
        Navbar {}
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-3",
                    onsubmit: on_submit,
                    h2 { class: "card-title", "Welcome back" }
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
                        if submitting() { "Signing in..." } else { "Login" }
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
