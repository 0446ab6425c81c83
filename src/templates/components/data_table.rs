use crate::domain::Table;
use maud::{html, Markup};

/// "Data Dimension" line followed by the table with its row index.
pub fn data_table(table: &Table) -> Markup {
    let (rows, cols) = table.dimensions();

    html! {
        h3 { "Data Dimension" }
        p { (rows) " rows, " (cols) " columns" }

        div style="overflow-x: auto;" {
            table class="data" {
                thead {
                    tr {
                        th {}
                        @for header in table.headers() {
                            th scope="col" { (header) }
                        }
                    }
                }
                tbody {
                    @for (i, row) in table.rows().iter().enumerate() {
                        tr {
                            th scope="row" { (i) }
                            @for cell in row {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}
