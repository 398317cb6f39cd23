use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Thin course-progress bar. `color` is a course accent token.
#[component]
pub fn ProgressBar(value: f64, #[props(default)] color: Option<String>) -> Element {
    let color = color.unwrap_or_else(|| "indigo".to_string());
    let width = value.clamp(0.0, 100.0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "portal-progress-wrap", "data-color": "{color}",
            prim::Progress {
                class: "portal-progress",
                value: Some(width),
                div { class: "portal-progress-indicator", style: "width: {width}%;" }
            }
        }
    }
}
