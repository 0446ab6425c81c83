use crate::shell::{ShellInput, TableView};
use crate::templates::components::{data_table, sidebar};
use crate::templates::desktop_layout;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use maud::{html, Markup};

/// Table of a scrape or a saved snapshot, with the CSV embedded in the download link.
pub fn listings_page(input: &ShellInput, view: &TableView) -> Markup {
    let csv_href = format!("data:text/csv;charset=utf-8;base64,{}", STANDARD.encode(view.csv.as_slice()));

    desktop_layout(
        &view.title,
        sidebar(input),
        html! {
            section class="card" {
                h2 { (view.title) }
                (data_table(&view.table))
                a class="download" href=(csv_href) download=(view.csv_file_name) {
                    "Download data as CSV"
                }
            }
        },
    )
}
