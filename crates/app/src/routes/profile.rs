use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdMail, LdMapPin};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, UserAvatar};

use crate::auth::use_current_user;

/// The logged-in user's profile.
#[component]
pub fn ProfilePage() -> Element {
    let Some(user) = use_current_user() else {
        return rsx! {};
    };
    let role = user.role.display_name();
    let about = user
        .about_me
        .clone()
        .unwrap_or_else(|| "No bio yet.".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            Card { class: "view-profile-hero",
                CardContent {
                    div { class: "view-profile-head",
                        UserAvatar { initials: user.initials(), src: user.avatar_url.clone(), large: true }
                        div {
                            h1 { class: "page-title", "{user.name}" }
                            div { class: "view-profile-tags",
                                Badge { tone: BadgeTone::Info, "{role}" }
                                if let Some(id) = user.student_id.as_ref() {
                                    Badge { "ID {id}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "view-columns",
                Card {
                    CardHeader { title: "About Me" }
                    CardContent {
                        p { class: "view-post-body", "{about}" }
                        if !user.hobbies.is_empty() {
                            div { class: "view-profile-tags",
                                for hobby in user.hobbies.iter() {
                                    Badge { key: "{hobby}", "{hobby}" }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { title: "Details" }
                    CardContent {
                        ul { class: "view-details",
                            li {
                                Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                                span { "{user.email}" }
                            }
                            if let Some(major) = user.major.as_ref() {
                                li {
                                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                                    span { "{major}" }
                                    if let Some(year) = user.year_level.as_ref() {
                                        span { class: "view-muted", " \u{2022} {year}" }
                                    }
                                }
                            }
                            if let Some(campus) = user.campus.as_ref() {
                                li {
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                                    span { "{campus}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
