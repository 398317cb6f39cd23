//! Admin-only pages. The guard keeps other roles out; these components do
//! not re-check the role.

use dioxus::prelude::*;
use shared_types::fixtures;
use shared_types::{UserRole, ALL_ROLES};
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow,
    PageHeader,
};

fn role_tone(role: UserRole) -> BadgeTone {
    match role {
        UserRole::Admin => BadgeTone::Danger,
        UserRole::Teacher => BadgeTone::Success,
        UserRole::Student => BadgeTone::Info,
    }
}

/// User directory.
#[component]
pub fn AdminUsersPage() -> Element {
    let users = use_hook(fixtures::directory);
    let columns = vec!["Name".to_string(), "Email".to_string(), "Role".to_string()];
    let summary = ALL_ROLES
        .iter()
        .map(|role| {
            let count = users.iter().filter(|u| u.role == *role).count();
            format!("{count} {}", role.display_name())
        })
        .collect::<Vec<_>>()
        .join(" \u{2022} ");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Users", subtitle: summary }

            Card {
                CardContent {
                    DataTable { columns: columns,
                        for user in users.iter() {
                            DataTableRow { key: "{user.id}",
                                DataTableCell { "{user.name}" }
                                DataTableCell { "{user.email}" }
                                DataTableCell {
                                    Badge { tone: role_tone(user.role), {user.role.as_str()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminReportsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Reports", subtitle: "Campus analytics and exports." }
            Card {
                CardHeader { title: "Coming soon" }
                CardContent {
                    p { class: "view-empty", "Reporting is not available yet." }
                }
            }
        }
    }
}

#[component]
pub fn AdminSettingsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Settings", subtitle: "Portal-wide configuration." }
            Card {
                CardHeader { title: "Coming soon" }
                CardContent {
                    p { class: "view-empty", "Settings are not available yet." }
                }
            }
        }
    }
}
