use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdMessageSquare, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{admin_overview, StatTone};
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, PageHeader, StatCard};

use crate::routes::Route;

fn tone_icon(tone: StatTone) -> Element {
    match tone {
        StatTone::Indigo => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
        StatTone::Emerald => {
            rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 24, height: 24 } }
        }
        StatTone::Blue => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 24, height: 24 } },
    }
}

/// Campus-wide overview for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    let users = use_hook(fixtures::directory);
    let courses = use_hook(fixtures::courses);
    let posts = use_hook(fixtures::forum_posts);
    let widgets = admin_overview(&users, &courses, &posts);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Admin Overview",
                subtitle: "Here is what is happening across campus.",
            }

            div { class: "dashboard-stats",
                for widget in widgets {
                    StatCard {
                        key: "{widget.title}",
                        title: widget.title.to_string(),
                        value: widget.value.clone(),
                        sub: widget.sub.to_string(),
                        tone: widget.tone.as_str().to_string(),
                        icon: tone_icon(widget.tone),
                    }
                }
            }

            Card {
                CardHeader {
                    title: "Recent Accounts",
                    action: rsx! {
                        Link { to: Route::AdminUsers {}, class: "dashboard-link", "Manage users" }
                    },
                }
                CardContent {
                    ul { class: "dashboard-accounts",
                        for user in users.iter().take(4) {
                            li { key: "{user.id}",
                                span { class: "dashboard-account-name", "{user.name}" }
                                span { class: "dashboard-account-email", "{user.email}" }
                                Badge { tone: BadgeTone::Info, "{user.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
