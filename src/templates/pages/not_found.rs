use crate::domain::Category;
use crate::shell::ShellInput;
use crate::templates::components::{not_found_notice, sidebar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn data_not_found_page(input: &ShellInput, category: Category, message: &str) -> Markup {
    desktop_layout(
        "Data not found",
        sidebar(input),
        html! {
            section class="card" {
                h2 { (category.label()) }
                (not_found_notice(message))
            }
        },
    )
}
