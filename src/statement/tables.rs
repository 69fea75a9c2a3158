//! Table sections of a statement document.
//!
//! Every table shares the same look: a shaded header row, plain body rows,
//! grid lines and right-aligned numbers.

use maud::{Markup, html};

use crate::{
    html::{
        NUMERIC_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, format_currency,
    },
    statement::{
        aggregation::StatementSummary,
        models::{RewardSnapshot, StatementTransaction},
    },
};

/// A two column table with a titled header row and one labelled value per row.
fn label_value_table(id: &str, heading: &str, rows: &[(&str, String)]) -> Markup {
    html! {
        section id=(id) {
            table class={(TABLE_STYLE) " summary-table"} {
                thead {
                    tr class=(TABLE_HEADER_STYLE) {
                        th scope="col" colspan="2" { (heading) }
                    }
                }
                tbody {
                    @for (label, value) in rows {
                        tr class=(TABLE_ROW_STYLE) {
                            td { (label) }
                            td class=(NUMERIC_CELL_STYLE) { (value) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the account summary: balances, totals, minimum payment and due date.
pub(super) fn account_summary_table(summary: &StatementSummary, currency_symbol: &str) -> Markup {
    let money = |amount| format_currency(amount, currency_symbol);

    label_value_table(
        "account-summary",
        "Account Summary",
        &[
            ("Previous Balance", money(summary.previous_balance)),
            ("Payments", money(summary.total_payments)),
            ("Purchases", money(summary.total_purchases)),
            ("Finance Charges", money(summary.finance_charge)),
            ("New Balance", money(summary.new_balance)),
            ("Minimum Payment", money(summary.minimum_payment)),
            ("Due Date", summary.due_date.to_string()),
        ],
    )
}

/// Renders one row per transaction. The header is rendered even when there
/// are no transactions.
pub(super) fn transactions_table(
    transactions: &[StatementTransaction],
    currency_symbol: &str,
) -> Markup {
    html! {
        section id="transactions" {
            h2 { "Transactions" }

            table class=(TABLE_STYLE) {
                thead {
                    tr class=(TABLE_HEADER_STYLE) {
                        th scope="col" style="width: 100px" { "Date" }
                        th scope="col" style="width: 300px" { "Description" }
                        th scope="col" style="width: 100px" { "Amount" }
                    }
                }
                tbody {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE) {
                            td { (transaction.date) }
                            td { (transaction.description) }
                            td class=(NUMERIC_CELL_STYLE) {
                                (format_currency(transaction.amount, currency_symbol))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the reward point balances for the period.
pub(super) fn rewards_table(rewards: &RewardSnapshot) -> Markup {
    label_value_table(
        "rewards-summary",
        "Rewards Summary",
        &[
            ("Opening Balance", rewards.opening_balance.to_string()),
            ("Earned Points", rewards.earned_points.to_string()),
            ("Redeemed Points", rewards.redeemed_points.to_string()),
            ("Closing Balance", rewards.closing_balance.to_string()),
        ],
    )
}
