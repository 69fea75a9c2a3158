//! Generates credit card billing statements.
//!
//! A statement is built from three read-only queries against the card
//! issuer's SQLite store (the customer profile, the card's transactions and
//! its reward points), an account summary calculated from those
//! transactions, and a printable A4 HTML document with the results.

#![warn(missing_docs)]

mod config;
mod database_id;
mod error;
mod html;
mod statement;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use config::StatementConfig;
pub use database_id::{CardId, CustomerId};
pub use error::Error;
pub use statement::{
    CustomerProfile, RewardSnapshot, Statement, StatementSummary, StatementTransaction,
    build_statement, due_date, generate_statement, generate_statement_on, get_customer_profile,
    get_reward_snapshot, get_transactions, render_statement, summarize, total_payments,
    total_purchases, write_document,
};
pub use timezone::today_in;
