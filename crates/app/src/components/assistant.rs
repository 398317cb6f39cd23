use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSend, LdSparkles, LdX};
use dioxus_free_icons::Icon;

use crate::auth::use_current_user;

/// Floating assistant launcher and panel, mounted by the shell on every page.
///
/// Only the overlay lives here. No conversation backend is wired in, so the
/// composer stays disabled.
#[component]
pub fn AssistantOverlay() -> Element {
    let mut open = use_signal(|| false);
    let greeting = use_current_user()
        .map(|u| format!("Hi {}! How can I help you today?", u.first_name()))
        .unwrap_or_else(|| "How can I help you today?".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assistant.css") }

        div { class: "assistant",
            if open() {
                div { class: "assistant-panel",
                    div { class: "assistant-header",
                        span { class: "assistant-title",
                            Icon::<LdSparkles> { icon: LdSparkles, width: 18, height: 18 }
                            " Campus Assistant"
                        }
                        button {
                            r#type: "button",
                            class: "assistant-close",
                            "aria-label": "Close assistant",
                            onclick: move |_| open.set(false),
                            Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                        }
                    }
                    div { class: "assistant-body",
                        p { class: "assistant-bubble", "{greeting}" }
                    }
                    div { class: "assistant-composer",
                        input {
                            r#type: "text",
                            placeholder: "The assistant is offline",
                            disabled: true,
                        }
                        button { r#type: "button", disabled: true,
                            Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "assistant-launcher",
                "aria-label": "Open assistant",
                onclick: move |_| open.set(!open()),
                Icon::<LdSparkles> { icon: LdSparkles, width: 24, height: 24 }
            }
        }
    }
}
