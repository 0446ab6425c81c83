use maud::{html, Markup, DOCTYPE};

pub const STYLESHEET: &str = r#"
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: linear-gradient(to right, #f8f9fa, #e9ecef);
  background-attachment: fixed;
  color: #343a40;
}
h1, h2 { color: #007bff; text-align: center; }
h3 { color: #495057; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 280px; padding: 1.5rem; background: #262730; color: white; }
.sidebar h1 { color: white; font-size: 1.3rem; }
.sidebar label { display: block; margin-top: 1rem; font-size: 0.9rem; }
.sidebar select, .sidebar button { width: 100%; margin-top: 0.3rem; padding: 6px; }
.sidebar button { margin-top: 1.5rem; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; }
main { flex: 1; padding: 2rem; overflow-x: auto; }
.card { background: white; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
table.data { border-collapse: collapse; width: 100%; font-size: 0.9em; }
table.data th, table.data td { padding: 6px 8px; border-bottom: 1px solid #e5e7eb; text-align: left; }
table.data th { background: #f3f4f6; }
.download { display: inline-block; margin-top: 1rem; padding: 8px 16px; background: #10b981; color: white; border-radius: 4px; text-decoration: none; }
.notice-error { padding: 1rem; border-radius: 6px; background: #fdecea; color: #b71c1c; }
"#;

pub fn desktop_layout(title: &str, sidebar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/app.css";
            }
            body {
                div class="shell" {
                    (sidebar)
                    main {
                        header {
                            h1 { "Expat-Dakar Listing Scraper" }
                            p {
                                "Scrape real-estate listings from Expat-Dakar one page at a time, "
                                "download saved data, or browse dashboards of the cleaned data."
                            }
                            p {
                                "Data source: "
                                a href="https://www.expat-dakar.com/" { "Expat-Dakar" }
                            }
                        }
                        (content)
                    }
                }
            }
        }
    }
}
