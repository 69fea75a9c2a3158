//! Generates a billing statement for one customer's credit card.
//!
//! Generation is a single pass: read the profile, transactions and reward
//! snapshot from the store, summarise the transactions, then render and
//! write the document. Nothing is written unless every query succeeded.

mod aggregation;
mod db;
mod document;
mod models;
mod tables;

use std::path::Path;

use rusqlite::Connection;
use time::Date;

pub(crate) use aggregation::round_currency;
pub use aggregation::{StatementSummary, due_date, summarize, total_payments, total_purchases};
pub use db::{get_customer_profile, get_reward_snapshot, get_transactions};
pub use document::{render_statement, write_document};
pub use models::{CustomerProfile, RewardSnapshot, StatementTransaction};

use crate::{
    Error,
    config::StatementConfig,
    database_id::{CardId, CustomerId},
    timezone::today_in,
};

/// Everything shown on a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Who the statement is addressed to and the card it covers.
    pub profile: CustomerProfile,
    /// Every transaction on the card, oldest first.
    pub transactions: Vec<StatementTransaction>,
    /// `None` if the card has no reward snapshot, in which case the rewards
    /// section is left out of the document.
    pub rewards: Option<RewardSnapshot>,
    /// The account summary figures.
    pub summary: StatementSummary,
    /// The date the statement was generated on.
    pub statement_date: Date,
}

/// Query the store and calculate the statement for `card_id`.
///
/// # Errors
/// Returns [Error::NotFound] if the customer or card does not exist or the
/// card belongs to another customer, [Error::SqlError] if a query fails,
/// [Error::InvalidConfig] if the due date cannot be derived, or
/// [Error::AmountOverflow] if the figures are too large to total.
pub fn build_statement(
    customer_id: CustomerId,
    card_id: CardId,
    connection: &Connection,
    config: &StatementConfig,
    statement_date: Date,
) -> Result<Statement, Error> {
    let profile = get_customer_profile(customer_id, card_id, connection)?;
    let transactions = get_transactions(card_id, connection)?;
    let rewards = get_reward_snapshot(card_id, connection)?;

    tracing::debug!(
        "loaded {} transactions for card {card_id}, reward snapshot present: {}",
        transactions.len(),
        rewards.is_some()
    );

    let summary = summarize(
        profile.previous_balance,
        &transactions,
        config,
        statement_date,
    )?;

    Ok(Statement {
        profile,
        transactions,
        rewards,
        summary,
        statement_date,
    })
}

/// Generate the statement for `card_id` as of `statement_date` and write it
/// to `output_path`.
///
/// # Errors
/// Returns an error if the config is invalid, the statement cannot be built
/// (see [build_statement]), or the document cannot be written
/// ([Error::Render]). No file is created if the statement cannot be built.
pub fn generate_statement_on(
    customer_id: CustomerId,
    card_id: CardId,
    output_path: &Path,
    connection: &Connection,
    config: &StatementConfig,
    statement_date: Date,
) -> Result<StatementSummary, Error> {
    config.validate()?;

    tracing::info!(
        "Generating statement for customer {customer_id}, card {card_id} on {statement_date}"
    );

    let statement = build_statement(customer_id, card_id, connection, config, statement_date)?;
    write_document(render_statement(&statement, config), output_path)?;

    tracing::info!(
        "Wrote statement to {output_path:?}: new balance {}, due {}",
        statement.summary.new_balance,
        statement.summary.due_date
    );

    Ok(statement.summary)
}

/// Generate the statement for `card_id` as of today in the configured
/// timezone and write it to `output_path`.
///
/// See [generate_statement_on] for details.
pub fn generate_statement(
    customer_id: CustomerId,
    card_id: CardId,
    output_path: &Path,
    connection: &Connection,
    config: &StatementConfig,
) -> Result<StatementSummary, Error> {
    let statement_date = today_in(&config.timezone)?;

    generate_statement_on(
        customer_id,
        card_id,
        output_path,
        connection,
        config,
        statement_date,
    )
}

#[cfg(test)]
mod generate_statement_tests {
    use rusqlite::Connection;
    use rust_decimal_macros::dec;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        Error,
        config::StatementConfig,
        test_utils::{assert_valid_html, create_statement_tables, insert_sample_statement_data},
    };

    use super::{build_statement, generate_statement, generate_statement_on};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_statement_tables(&conn).unwrap();
        insert_sample_statement_data(&conn).unwrap();
        conn
    }

    #[test]
    fn builds_worked_example() {
        let conn = get_test_connection();

        let statement = build_statement(
            1,
            1,
            &conn,
            &StatementConfig::default(),
            date!(2026 - 10 - 19),
        )
        .unwrap();

        assert_eq!(statement.transactions.len(), 2);
        assert!(statement.rewards.is_some());
        assert_eq!(statement.summary.total_payments, dec!(30.00));
        assert_eq!(statement.summary.total_purchases, dec!(50.00));
        assert_eq!(statement.summary.new_balance, dec!(150.00));
        assert_eq!(statement.summary.minimum_payment, dec!(7.50));
        assert_eq!(statement.summary.due_date, date!(2026 - 11 - 25));
    }

    #[test]
    fn totals_sub_cent_amounts_before_rounding() {
        let conn = get_test_connection();
        conn.execute_batch(
            "INSERT INTO transactions (credit_card_id, transaction_date, description, amount) VALUES
                (2, '2026-10-01', 'Fee share', '0.005'),
                (2, '2026-10-02', 'Fee share', '0.005'),
                (2, '2026-10-03', 'Fee share', '0.005');",
        )
        .unwrap();

        let statement = build_statement(
            2,
            2,
            &conn,
            &StatementConfig::default(),
            date!(2026 - 10 - 19),
        )
        .unwrap();

        assert_eq!(statement.summary.total_purchases, dec!(0.02));
        assert_eq!(statement.summary.new_balance, dec!(30.02));
    }

    #[test]
    fn writes_complete_document() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("statements").join("statement.html");

        let summary = generate_statement_on(
            1,
            1,
            &output_path,
            &conn,
            &StatementConfig::default(),
            date!(2026 - 10 - 19),
        )
        .unwrap();

        assert_eq!(summary.new_balance, dec!(150.00));
        let text = std::fs::read_to_string(&output_path).unwrap();
        let document = Html::parse_document(&text);
        assert_valid_html(&document);
        assert_eq!(
            document
                .select(&Selector::parse("#transactions tbody tr").unwrap())
                .count(),
            2
        );
        assert_eq!(
            document
                .select(&Selector::parse("#rewards-summary").unwrap())
                .count(),
            1
        );
        assert!(text.contains("RM 150.00"));
    }

    #[test]
    fn card_without_transactions_or_rewards_still_renders() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("statement.html");

        let summary = generate_statement_on(
            2,
            2,
            &output_path,
            &conn,
            &StatementConfig::default(),
            date!(2026 - 10 - 19),
        )
        .unwrap();

        assert_eq!(summary.new_balance, dec!(30.00));
        let document = Html::parse_document(&std::fs::read_to_string(&output_path).unwrap());
        assert_eq!(
            document
                .select(&Selector::parse("#transactions thead tr").unwrap())
                .count(),
            1
        );
        assert_eq!(
            document
                .select(&Selector::parse("#transactions tbody tr").unwrap())
                .count(),
            0
        );
        assert_eq!(
            document
                .select(&Selector::parse("#rewards-summary").unwrap())
                .count(),
            0
        );
    }

    #[test]
    fn unknown_customer_writes_nothing() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("statements").join("statement.html");

        let result = generate_statement_on(
            999,
            1,
            &output_path,
            &conn,
            &StatementConfig::default(),
            date!(2026 - 10 - 19),
        );

        assert_eq!(result, Err(Error::NotFound));
        assert!(!output_path.exists());
        assert!(!dir.path().join("statements").exists());
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("statement.html");
        let config = StatementConfig {
            due_day: 31,
            ..Default::default()
        };

        let result =
            generate_statement_on(1, 1, &output_path, &conn, &config, date!(2026 - 10 - 19));

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        assert!(!output_path.exists());
    }

    #[test]
    fn generating_twice_gives_identical_documents() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let first_path = dir.path().join("first.html");
        let second_path = dir.path().join("second.html");
        let config = StatementConfig::default();

        let first =
            generate_statement_on(1, 1, &first_path, &conn, &config, date!(2026 - 10 - 19));
        let second =
            generate_statement_on(1, 1, &second_path, &conn, &config, date!(2026 - 10 - 19));

        assert_eq!(first, second);
        assert_eq!(
            std::fs::read(&first_path).unwrap(),
            std::fs::read(&second_path).unwrap()
        );
    }

    #[test]
    fn generate_uses_todays_date() {
        let conn = get_test_connection();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("statement.html");

        let summary = generate_statement(
            1,
            1,
            &output_path,
            &conn,
            &StatementConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.new_balance, dec!(150.00));
        assert!(output_path.is_file());
    }
}
