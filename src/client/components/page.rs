use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}

/// Heading shared by every signed-in view
#[component]
pub fn PageHeader(title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx!(
        header { class: "mb-6",
            h2 { class: "text-2xl font-bold",
                "{title}"
            }
            if let Some(subtitle) = subtitle {
                p { class: "text-base-content/70",
                    "{subtitle}"
                }
            }
        }
    )
}
