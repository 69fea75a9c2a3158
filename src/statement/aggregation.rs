//! Summary figures for a statement derived from the card's transactions.
//!
//! Transaction amounts are summed at full precision and only the resulting
//! figures are rounded to cents, so the account summary adds up exactly as
//! printed.

use rust_decimal::{Decimal, RoundingStrategy};
use time::{Date, Month};

use crate::{Error, config::StatementConfig, statement::models::StatementTransaction};

/// The account summary figures shown on a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSummary {
    /// The balance carried over from the previous statement.
    pub previous_balance: Decimal,
    /// The sum of all payments and credits, as a non-negative amount.
    pub total_payments: Decimal,
    /// The sum of all purchases.
    pub total_purchases: Decimal,
    /// The fixed fee charged this cycle.
    pub finance_charge: Decimal,
    /// `previous_balance - total_payments + total_purchases + finance_charge`.
    pub new_balance: Decimal,
    /// The smallest amount that must be paid by [StatementSummary::due_date].
    pub minimum_payment: Decimal,
    /// When payment is due.
    pub due_date: Date,
}

/// Round `amount` to two decimal places, with halves rounded away from zero.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal, Error> {
    let total = amounts.try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or(Error::AmountOverflow)
    })?;

    Ok(round_currency(total))
}

/// The total of all payments and credits, expressed as a positive amount.
///
/// # Errors
/// Returns [Error::AmountOverflow] if the total does not fit in a [Decimal].
pub fn total_payments(transactions: &[StatementTransaction]) -> Result<Decimal, Error> {
    checked_total(
        transactions
            .iter()
            .filter(|transaction| transaction.is_payment())
            .map(|transaction| transaction.amount.abs()),
    )
}

/// The total of all purchases.
///
/// # Errors
/// Returns [Error::AmountOverflow] if the total does not fit in a [Decimal].
pub fn total_purchases(transactions: &[StatementTransaction]) -> Result<Decimal, Error> {
    checked_total(
        transactions
            .iter()
            .filter(|transaction| transaction.is_purchase())
            .map(|transaction| transaction.amount),
    )
}

/// The `due_day` of the calendar month after `statement_date`.
///
/// For example, with a due day of 25 a statement generated on 2026-12-31
/// is due on 2027-01-25.
///
/// # Errors
/// Returns [Error::InvalidConfig] if `due_day` does not exist in the
/// following month.
pub fn due_date(statement_date: Date, due_day: u8) -> Result<Date, Error> {
    let (year, month) = match statement_date.month() {
        Month::December => (statement_date.year() + 1, Month::January),
        month => (statement_date.year(), month.next()),
    };

    Date::from_calendar_date(year, month, due_day)
        .map_err(|error| Error::InvalidConfig(format!("invalid due day {due_day}: {error}")))
}

/// Calculate the account summary for a card.
///
/// `statement_date` is the date the statement is generated on and is only
/// used to derive the due date.
///
/// # Errors
/// Returns [Error::InvalidConfig] if the configured due day cannot be used,
/// or [Error::AmountOverflow] if a figure does not fit in a [Decimal].
pub fn summarize(
    previous_balance: Decimal,
    transactions: &[StatementTransaction],
    config: &StatementConfig,
    statement_date: Date,
) -> Result<StatementSummary, Error> {
    let previous_balance = round_currency(previous_balance);
    let total_payments = total_payments(transactions)?;
    let total_purchases = total_purchases(transactions)?;
    let finance_charge = round_currency(config.finance_charge);

    let new_balance = previous_balance
        .checked_sub(total_payments)
        .and_then(|balance| balance.checked_add(total_purchases))
        .and_then(|balance| balance.checked_add(finance_charge))
        .ok_or(Error::AmountOverflow)?;
    let minimum_payment = new_balance
        .checked_mul(config.minimum_payment_rate)
        .map(round_currency)
        .ok_or(Error::AmountOverflow)?
        .max(Decimal::ZERO);

    tracing::debug!(
        "summarised {} transactions: new balance {new_balance}",
        transactions.len()
    );

    Ok(StatementSummary {
        previous_balance,
        total_payments,
        total_purchases,
        finance_charge,
        new_balance,
        minimum_payment,
        due_date: due_date(statement_date, config.due_day)?,
    })
}
