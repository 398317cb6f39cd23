use dioxus::prelude::*;

/// Headline number card on the dashboards.
///
/// `tone` selects the gradient (`"indigo"`, `"blue"`, `"emerald"`, `"amber"`,
/// `"rose"`); `icon` sits in the gradient chip.
#[component]
pub fn StatCard(title: String, value: String, sub: String, tone: String, icon: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": "{tone}",
            div { class: "stat-card-glow" }
            div { class: "stat-card-chip", {icon} }
            h3 { class: "stat-card-value", "{value}" }
            p { class: "stat-card-title", "{title}" }
            p { class: "stat-card-sub",
                span { class: "stat-card-dot" }
                "{sub}"
            }
        }
    }
}
