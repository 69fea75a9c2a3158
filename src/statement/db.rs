//! Read-only queries for the customer, transaction and reward data on a statement.

use std::str::FromStr;

use rusqlite::{
    Connection, OptionalExtension, Row, named_params,
    types::{FromSql, FromSqlError, FromSqlResult, ValueRef},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use time::{Date, macros::format_description};

use crate::{
    Error,
    database_id::{CardId, CustomerId},
    statement::models::{CustomerProfile, RewardSnapshot, StatementTransaction},
};

/// Retrieve the name, address, card number and previous balance for a
/// customer's card.
///
/// # Errors
/// Returns [Error::NotFound] if the customer does not exist, the card does
/// not exist, or the card belongs to a different customer.
/// Returns [Error::SqlError] if the query fails.
pub fn get_customer_profile(
    customer_id: CustomerId,
    card_id: CardId,
    connection: &Connection,
) -> Result<CustomerProfile, Error> {
    connection
        .prepare(
            "SELECT c.name, c.address, cc.card_number, cc.previous_balance
            FROM customers c
            INNER JOIN credit_cards cc ON c.id = cc.customer_id
            WHERE c.id = :customer_id AND cc.id = :card_id;",
        )?
        .query_row(
            named_params! { ":customer_id": customer_id, ":card_id": card_id },
            map_profile_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve every transaction for a card, oldest first.
///
/// A card without transactions yields an empty list.
pub fn get_transactions(
    card_id: CardId,
    connection: &Connection,
) -> Result<Vec<StatementTransaction>, Error> {
    connection
        .prepare(
            "SELECT transaction_date, description, amount
            FROM transactions
            WHERE credit_card_id = :card_id
            ORDER BY transaction_date ASC;",
        )?
        .query_map(&[(":card_id", &card_id)], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the reward point snapshot for a card, if it has one.
pub fn get_reward_snapshot(
    card_id: CardId,
    connection: &Connection,
) -> Result<Option<RewardSnapshot>, Error> {
    connection
        .prepare(
            "SELECT opening_balance, earned_points, redeemed_points, closing_balance
            FROM rewards
            WHERE credit_card_id = :card_id;",
        )?
        .query_row(&[(":card_id", &card_id)], map_reward_row)
        .optional()
        .map_err(|error| error.into())
}

fn map_profile_row(row: &Row) -> Result<CustomerProfile, rusqlite::Error> {
    let name = row.get(0)?;
    let address = row.get(1)?;
    let card_number = row.get(2)?;
    let StoredAmount(previous_balance) = row.get(3)?;

    Ok(CustomerProfile {
        name,
        address,
        card_number,
        previous_balance,
    })
}

fn map_transaction_row(row: &Row) -> Result<StatementTransaction, rusqlite::Error> {
    let StoredDate(date) = row.get(0)?;
    let description = row.get(1)?;
    let StoredAmount(amount) = row.get(2)?;

    Ok(StatementTransaction {
        date,
        description,
        amount,
    })
}

fn map_reward_row(row: &Row) -> Result<RewardSnapshot, rusqlite::Error> {
    let StoredPoints(opening_balance) = row.get(0)?;
    let StoredPoints(earned_points) = row.get(1)?;
    let StoredPoints(redeemed_points) = row.get(2)?;
    let StoredPoints(closing_balance) = row.get(3)?;

    Ok(RewardSnapshot {
        opening_balance,
        earned_points,
        redeemed_points,
        closing_balance,
    })
}

/// A numeric column read as an exact decimal.
///
/// SQLite has no decimal type, so values may have been stored as INTEGER,
/// REAL or TEXT.
fn read_decimal(value: ValueRef<'_>) -> FromSqlResult<Decimal> {
    match value {
        ValueRef::Integer(integer) => Ok(Decimal::from(integer)),
        ValueRef::Real(real) => {
            Decimal::try_from(real).map_err(|error| FromSqlError::Other(Box::new(error)))
        }
        ValueRef::Text(text) => {
            let text = read_text(text)?;
            Decimal::from_str(text.trim()).map_err(|error| FromSqlError::Other(Box::new(error)))
        }
        ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
    }
}

fn read_text(text: &[u8]) -> FromSqlResult<&str> {
    std::str::from_utf8(text).map_err(|error| FromSqlError::Other(Box::new(error)))
}

/// A currency amount at the precision it was stored with.
///
/// Amounts are rounded to cents only once they have been totalled.
struct StoredAmount(Decimal);

impl FromSql for StoredAmount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        read_decimal(value).map(StoredAmount)
    }
}

/// A whole number of reward points.
///
/// Accepts integral REAL or TEXT values such as `1000.0`, and rejects
/// fractional points.
struct StoredPoints(i64);

impl FromSql for StoredPoints {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        if let ValueRef::Integer(points) = value {
            return Ok(StoredPoints(points));
        }

        let points = read_decimal(value)?;
        if !points.fract().is_zero() {
            return Err(FromSqlError::Other(
                format!("reward points must be a whole number, got {points}").into(),
            ));
        }

        points.to_i64().map(StoredPoints).ok_or(FromSqlError::OutOfRange(0))
    }
}

/// A date stored as `YYYY-MM-DD` text, optionally followed by a time of day,
/// e.g. `2026-10-01 10:30:00` or `2026-10-01T10:30:00Z`.
///
/// Only the calendar date is kept.
struct StoredDate(Date);

impl FromSql for StoredDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let ValueRef::Text(text) = value else {
            return Err(FromSqlError::InvalidType);
        };

        let text = read_text(text)?.trim();
        let date_part = text.split(['T', ' ']).next().unwrap_or(text);

        Date::parse(date_part, format_description!("[year]-[month]-[day]"))
            .map(StoredDate)
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
