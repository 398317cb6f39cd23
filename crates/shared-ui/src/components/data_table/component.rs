use dioxus::prelude::*;

/// Scrollable table for directory-style listings.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns {
                            th { "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
