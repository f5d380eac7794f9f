use dioxus::prelude::*;

/// Horizontal bar filled to `percent`, clamped to 0..=100
#[component]
pub fn ProgressBar(percent: f64, class: Option<&'static str>) -> Element {
    let width = percent.clamp(0.0, 100.0);
    let class = class.unwrap_or("bg-primary");

    rsx!(
        div { class: "w-full bg-base-300 rounded-full h-2.5",
            div {
                class: "{class} h-2.5 rounded-full transition-all duration-300",
                style: "width: {width}%",
            }
        }
    )
}
