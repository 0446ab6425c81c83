// templates/pages/home.rs

use crate::shell::ShellInput;
use crate::templates::{
    components::{card, sidebar},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(input: &ShellInput) -> Markup {
    desktop_layout(
        "Listing Scraper",
        sidebar(input),
        html! {
            (card("Getting started", html! {
                p { "Pick a category, a page index and an option in the sidebar, then press Run." }
                ul {
                    li { strong { "Scrape the data" } ": fetch the selected index page and every listing on it." }
                    li { strong { "Download the scraped data" } ": browse and download a previously saved scrape." }
                    li { strong { "Dashboard of the data (clean)" } ": price distribution and top areas." }
                    li { strong { "Please fill the app form" } ": give us feedback." }
                }
                p {
                    (input.category.label()) " has pages 1 to " (input.category.last_page()) "."
                }
            }))
        },
    )
}
