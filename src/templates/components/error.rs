use maud::{html, Markup, DOCTYPE};

/// Standalone page for failed requests.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/app.css";
            }
            body {
                main style="max-width: 720px; margin: 4rem auto;" {
                    h1 { "Error " (status) }
                    p class="notice-error" { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}

/// Inline error state for missing saved data.
pub fn not_found_notice(message: &str) -> Markup {
    html! {
        div class="notice-error" role="alert" { (message) }
    }
}
