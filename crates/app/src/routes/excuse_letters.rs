use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPaperclip;
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::ExcuseStatus;
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, DataTable, DataTableCell, DataTableRow, PageHeader,
};

fn status_tone(status: ExcuseStatus) -> BadgeTone {
    match status {
        ExcuseStatus::Pending => BadgeTone::Warning,
        ExcuseStatus::Approved => BadgeTone::Success,
        ExcuseStatus::Rejected => BadgeTone::Danger,
    }
}

/// Excuse letters filed for missed classes.
#[component]
pub fn ExcuseLettersPage() -> Element {
    let letters = use_hook(fixtures::excuse_letters);
    let columns = vec![
        "Course".to_string(),
        "Reason".to_string(),
        "Date".to_string(),
        "Attachment".to_string(),
        "Status".to_string(),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "Excuse Letters", subtitle: "Track absences and their approval status." }

            Card {
                CardContent {
                    DataTable { columns: columns,
                        for letter in letters.iter() {
                            DataTableRow { key: "{letter.id}",
                                DataTableCell { "{letter.course_name}" }
                                DataTableCell { "{letter.reason}" }
                                DataTableCell { "{letter.date}" }
                                DataTableCell {
                                    if let Some(file) = letter.attachment_url.as_ref() {
                                        span { class: "view-attachment",
                                            Icon::<LdPaperclip> { icon: LdPaperclip, width: 14, height: 14 }
                                            " {file}"
                                        }
                                    } else {
                                        span { class: "view-muted", "None" }
                                    }
                                }
                                DataTableCell {
                                    Badge { tone: status_tone(letter.status), {letter.status.as_str()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
