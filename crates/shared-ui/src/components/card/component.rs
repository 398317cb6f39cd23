use dioxus::prelude::*;

/// Frosted "glass" card, the base surface of every portal panel.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "glass-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row of a card, with an optional trailing action.
#[component]
pub fn CardHeader(title: String, #[props(default)] action: Option<Element>) -> Element {
    rsx! {
        div { class: "glass-card-header",
            h2 { class: "glass-card-title", "{title}" }
            if let Some(action) = action {
                div { class: "glass-card-action", {action} }
            }
        }
    }
}

/// Padded body of a card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "glass-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "glass-card-footer", {children} }
    }
}
