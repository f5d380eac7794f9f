use dioxus::prelude::*;

#[component]
pub fn Loading(label: Option<&'static str>) -> Element {
    rsx!(
        div { class: "flex items-center justify-center gap-3 p-8",
            span { class: "loading loading-spinner loading-md" }
            if let Some(label) = label {
                p { "{label}" }
            }
        }
    )
}
