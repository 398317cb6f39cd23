use dioxus::prelude::*;

/// Semantic tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Info => "info",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
        }
    }
}

/// Small uppercase label for statuses, roles and counters.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "portal-badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
