//! Records read from the store for a single statement.

use rust_decimal::Decimal;
use time::Date;

/// The customer and card details shown at the top of a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    /// The customer's full name.
    pub name: String,
    /// The customer's postal address.
    pub address: String,
    /// The full card number as stored. Only the last four digits are rendered.
    pub card_number: String,
    /// The balance carried over from the previous statement.
    pub previous_balance: Decimal,
}

impl CustomerProfile {
    /// The card number with all but the last four digits hidden,
    /// e.g. "**** **** **** 1234".
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();

        format!("**** **** **** {last_four}")
    }
}

/// A purchase or payment made with a card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Positive for purchases, negative for payments and credits.
    pub amount: Decimal,
}

impl StatementTransaction {
    /// Whether the transaction increased the balance owed.
    pub fn is_purchase(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Whether the transaction reduced the balance owed.
    pub fn is_payment(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// The reward point balances for a card over the statement period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardSnapshot {
    /// Points held at the start of the period.
    pub opening_balance: i64,
    /// Points earned during the period.
    pub earned_points: i64,
    /// Points spent during the period.
    pub redeemed_points: i64,
    /// Points held at the end of the period.
    pub closing_balance: i64,
}
