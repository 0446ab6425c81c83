use crate::shell::{ShellInput, FORM_URL};
use crate::templates::components::sidebar;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn form_page(input: &ShellInput) -> Markup {
    desktop_layout(
        "App form",
        sidebar(input),
        html! {
            h3 { "Please fill the Form Below" }
            iframe src=(FORM_URL) width="800" height="1100" style="border: none;" {}
        },
    )
}
