use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMapPin;
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{LostItem, LostItemStatus};
use shared_ui::{Badge, BadgeTone, Card, CardContent, PageHeader};

fn status_tone(status: LostItemStatus) -> BadgeTone {
    match status {
        LostItemStatus::Lost => BadgeTone::Danger,
        LostItemStatus::Found => BadgeTone::Success,
        LostItemStatus::Claimed => BadgeTone::Neutral,
    }
}

/// Lost & found board.
#[component]
pub fn LostFoundPage() -> Element {
    let items = use_hook(fixtures::lost_items);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Lost & Found", subtitle: "Report or find missing items around campus." }

            div { class: "view-grid",
                for item in items.iter() {
                    ItemCard { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn ItemCard(item: LostItem) -> Element {
    let status = item.status.as_str();

    rsx! {
        Card { class: "view-item-card",
            img { class: "view-item-image", src: "{item.image_url}", alt: "{item.title}" }
            CardContent {
                div { class: "view-item-head",
                    h3 { class: "view-row-title", "{item.title}" }
                    Badge { tone: status_tone(item.status), "{status}" }
                }
                p { class: "view-muted", "{item.description}" }
                p { class: "view-item-location",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                    " {item.location}"
                }
                p { class: "view-muted", "{item.date} \u{2022} {item.contact_name}" }
            }
        }
    }
}
