use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Round user avatar. Shows the image when it loads, the initials otherwise.
#[component]
pub fn UserAvatar(
    initials: String,
    #[props(default)] src: Option<String>,
    #[props(default = false)] large: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar {
            class: if large { "portal-avatar portal-avatar-lg" } else { "portal-avatar" },
            if let Some(src) = src {
                prim::AvatarImage { class: "portal-avatar-image", src: src }
            }
            prim::AvatarFallback { class: "portal-avatar-fallback", "{initials}" }
        }
    }
}
