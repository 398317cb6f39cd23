use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMapPin;
use dioxus_free_icons::Icon;
use shared_types::fixtures::CAMPUS_BUILDINGS;
use shared_ui::{Card, CardContent, PageHeader};

/// Campus directory of buildings.
#[component]
pub fn CampusMapPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Campus Map", subtitle: "Find your way around campus." }

            div { class: "view-grid",
                for (name, description) in CAMPUS_BUILDINGS.iter().copied() {
                    Card { key: "{name}",
                        CardContent {
                            div { class: "view-item-head",
                                Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                                h3 { class: "view-row-title", "{name}" }
                            }
                            p { class: "view-muted", "{description}" }
                        }
                    }
                }
            }
        }
    }
}
