#![allow(missing_docs)]

use rusqlite::Connection;
use scraper::Html;

/// Create the customer, card, transaction and reward tables.
///
/// The store is owned by another system, so this only exists for tests.
pub(crate) fn create_statement_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE customers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        );

        CREATE TABLE credit_cards (
            id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            card_number TEXT NOT NULL,
            previous_balance DECIMAL(10, 2) NOT NULL,
            FOREIGN KEY(customer_id) REFERENCES customers(id)
        );

        CREATE TABLE transactions (
            id INTEGER PRIMARY KEY,
            credit_card_id INTEGER NOT NULL,
            transaction_date TEXT NOT NULL,
            description TEXT NOT NULL,
            -- No declared type, values keep the storage class they were inserted with.
            amount NOT NULL,
            FOREIGN KEY(credit_card_id) REFERENCES credit_cards(id)
        );

        CREATE TABLE rewards (
            id INTEGER PRIMARY KEY,
            credit_card_id INTEGER NOT NULL,
            opening_balance INTEGER NOT NULL,
            earned_points INTEGER NOT NULL,
            redeemed_points INTEGER NOT NULL,
            closing_balance INTEGER NOT NULL,
            FOREIGN KEY(credit_card_id) REFERENCES credit_cards(id)
        );",
    )
}

/// Two customers: customer 1 owns card 1, which has a purchase, a payment
/// and a reward snapshot; customer 2 owns card 2, which has neither.
pub(crate) fn insert_sample_statement_data(
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT INTO customers (id, name, address) VALUES
            (1, 'Aisyah Rahman', '12 Jalan Ampang, Kuala Lumpur'),
            (2, 'Wei Ling Tan', '8 Lorong Kurau, Penang');

        INSERT INTO credit_cards (id, customer_id, card_number, previous_balance) VALUES
            (1, 1, '4111111111111234', 100.00),
            (2, 2, '4111111111115678', 0);

        INSERT INTO transactions (credit_card_id, transaction_date, description, amount) VALUES
            (1, '2026-10-03', 'Village Grocer', 50.00),
            (1, '2026-10-12', 'Payment - Thank You', -30.00);

        INSERT INTO rewards
            (credit_card_id, opening_balance, earned_points, redeemed_points, closing_balance)
        VALUES (1, 1000, 50, 0, 1050);",
    )
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
