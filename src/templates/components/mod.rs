use maud::{html, Markup};

pub mod charts;
pub mod data_table;
pub mod error;
pub mod sidebar;

pub use charts::{histogram_chart, pie_chart};
pub use data_table::data_table;
pub use error::{error_page, not_found_notice};
pub use sidebar::sidebar;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
