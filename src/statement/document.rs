//! Assembles the statement sections into one document and writes it to disk.

use std::{fs, path::Path};

use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    config::StatementConfig,
    html::base,
    statement::{
        Statement,
        models::CustomerProfile,
        tables::{account_summary_table, rewards_table, transactions_table},
    },
};

fn customer_details(profile: &CustomerProfile, statement_date: Date) -> Markup {
    html! {
        section id="customer-details" class="customer-details" {
            p { (profile.name) }
            p { (profile.address) }
            p { "Card Number: " (profile.masked_card_number()) }
            p { "Statement Date: " (statement_date) }
        }
    }
}

/// Lay out every section of `statement` in order: title, customer details,
/// account summary, transactions and, when the card has one, the rewards
/// summary.
pub fn render_statement(statement: &Statement, config: &StatementConfig) -> Markup {
    let content = html! {
        header id="statement-header" {
            h1 { (config.title) }
        }

        (customer_details(&statement.profile, statement.statement_date))
        (account_summary_table(&statement.summary, &config.currency_symbol))
        (transactions_table(&statement.transactions, &config.currency_symbol))

        @if let Some(rewards) = &statement.rewards {
            (rewards_table(rewards))
        }
    };

    base(&config.title, &content)
}

/// Write a rendered document to `output_path`, creating any missing parent
/// directories.
///
/// # Errors
/// Returns [Error::Render] if a directory cannot be created or the file
/// cannot be written. The contents of `output_path` are undefined after a
/// failure.
pub fn write_document(document: Markup, output_path: &Path) -> Result<(), Error> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|error| {
            Error::Render(format!("could not create directory {parent:?}: {error}"))
        })?;
    }

    fs::write(output_path, document.into_string())
        .map_err(|error| Error::Render(format!("could not write {output_path:?}: {error}")))
}
