use maud::{DOCTYPE, Markup, PreEscaped, html};
use rust_decimal::Decimal;

use crate::statement::round_currency;

// Table styles
pub const TABLE_STYLE: &str = "statement-table";
pub const TABLE_HEADER_STYLE: &str = "header-row";
pub const TABLE_ROW_STYLE: &str = "body-row";
pub const NUMERIC_CELL_STYLE: &str = "numeric";

// Print layout for the whole document. Table headers repeat on every page
// and rows are never split across a page break.
const PRINT_STYLES: &str = r#"
    @page {
        size: A4;
        margin: 20mm 15mm;
    }

    body {
        font-family: Helvetica, Arial, sans-serif;
        font-size: 10pt;
        color: black;
        margin: 0;
    }

    h1 { font-size: 18pt; margin: 0 0 20px 0; }
    h2 { font-size: 14pt; margin: 20px 0 8px 0; }

    section { margin-bottom: 20px; }

    .customer-details p { margin: 0 0 12px 0; }

    .statement-table {
        border-collapse: collapse;
        page-break-inside: auto;
    }

    .statement-table th,
    .statement-table td {
        border: 1px solid black;
        padding: 4px 6px;
        text-align: left;
    }

    .statement-table thead { display: table-header-group; }
    .statement-table tr { page-break-inside: avoid; }

    .header-row th {
        background-color: grey;
        color: whitesmoke;
        font-weight: bold;
        font-size: 12pt;
        padding-bottom: 12px;
    }

    .body-row td {
        background-color: white;
        color: black;
    }

    .statement-table td.numeric { text-align: right; }

    .summary-table td:first-child { width: 200px; }
    .summary-table td.numeric { width: 100px; }
"#;

/// Wrap `content` in a standalone, printable HTML document.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PRINT_STYLES)) }
            }

            body
            {
                (content)
            }
        }
    }
}

/// Format an amount with a currency prefix and exactly two decimal places,
/// e.g. "RM 150.00" or "RM -30.00".
///
/// Amounts with fractions of a cent are rounded half away from zero.
pub fn format_currency(amount: Decimal, currency_symbol: &str) -> String {
    let amount = round_currency(amount);
    format!("{currency_symbol} {amount:.2}")
}
