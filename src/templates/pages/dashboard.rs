use crate::shell::{DashboardView, ShellInput};
use crate::templates::components::{histogram_chart, pie_chart, sidebar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn dashboard_page(input: &ShellInput, view: &DashboardView) -> Markup {
    let label = view.category.label();

    desktop_layout(
        "Dashboard",
        sidebar(input),
        html! {
            section class="card" {
                h2 { "Dashboard for " (label) }
                p { (view.rows) " rows of cleaned data." }

                (histogram_chart(&format!("Price Distribution for {label}"), &view.histogram))
                (pie_chart(&format!("Top Areas for {label}"), &view.areas))
            }
        },
    )
}
