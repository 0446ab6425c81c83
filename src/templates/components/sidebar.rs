use crate::domain::Category;
use crate::shell::{Action, ShellInput};
use maud::{html, Markup};

/// Category, page and action selectors. The page list only covers the
/// selected category, so switching category reloads the form first.
pub fn sidebar(input: &ShellInput) -> Markup {
    html! {
        aside class="sidebar" {
            h1 { "User Input Features" }

            form action="/run" method="get" id="shell-form" {
                label for="category" { "Select Category" }
                select
                    name="category"
                    id="category"
                    onchange="this.form.action='/'; this.form.submit();"
                {
                    @for category in Category::ALL {
                        option value=(category.slug()) selected[category == input.category] {
                            (category.label())
                        }
                    }
                }

                label for="page" { "Page Index" }
                select name="page" id="page" {
                    @for page in 1..=input.category.last_page() {
                        option value=(page) selected[page == input.page] { (page) }
                    }
                }

                label for="action" { "Options" }
                select name="action" id="action" {
                    @for action in Action::ALL {
                        option value=(action.slug()) selected[action == input.action] {
                            (action.label())
                        }
                    }
                }

                button type="submit" { "Run" }
            }
        }
    }
}
