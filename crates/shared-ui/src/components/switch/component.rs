use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Labelled on/off switch. Used for the dark-mode toggle.
#[component]
pub fn LabeledSwitch(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "portal-switch-row",
            span { class: "portal-switch-label", "{label}" }
            prim::Switch {
                class: "portal-switch",
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "portal-switch-thumb" }
            }
        }
    }
}
