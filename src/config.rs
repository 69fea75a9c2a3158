//! Policy values that control how a statement is calculated and presented.

use rust_decimal::Decimal;

use crate::{Error, timezone::get_local_offset};

/// The settings used to calculate and render a statement.
///
/// Changing the finance charge or due date policy only requires a different
/// config, the aggregation code reads everything from here.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementConfig {
    /// The heading shown at the top of the document.
    pub title: String,
    /// The prefix for formatted currency amounts, e.g. "RM".
    pub currency_symbol: String,
    /// The fixed fee added to the new balance each cycle.
    pub finance_charge: Decimal,
    /// The fraction of the new balance that must be paid by the due date.
    pub minimum_payment_rate: Decimal,
    /// The day of the following month on which payment is due.
    pub due_day: u8,
    /// The canonical timezone name used to decide what "today" is,
    /// e.g. "Asia/Kuala_Lumpur".
    pub timezone: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            title: "Maybank Credit Card Statement".to_owned(),
            currency_symbol: "RM".to_owned(),
            finance_charge: Decimal::new(3000, 2),
            minimum_payment_rate: Decimal::new(5, 2),
            due_day: 25,
            timezone: "Asia/Kuala_Lumpur".to_owned(),
        }
    }
}

impl StatementConfig {
    /// The latest due day that exists in every month.
    pub const MAX_DUE_DAY: u8 = 28;

    /// Check that the config describes a usable policy.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the finance charge is negative, the
    /// minimum payment rate is outside 0 to 1, or the due day does not exist
    /// in every month. Returns [Error::InvalidTimezone] if the timezone is not
    /// a known canonical timezone.
    pub fn validate(&self) -> Result<(), Error> {
        if self.finance_charge < Decimal::ZERO {
            return Err(Error::InvalidConfig(format!(
                "finance charge must not be negative, got {}",
                self.finance_charge
            )));
        }

        if self.minimum_payment_rate < Decimal::ZERO || self.minimum_payment_rate > Decimal::ONE {
            return Err(Error::InvalidConfig(format!(
                "minimum payment rate must be between 0 and 1, got {}",
                self.minimum_payment_rate
            )));
        }

        if !(1..=Self::MAX_DUE_DAY).contains(&self.due_day) {
            return Err(Error::InvalidConfig(format!(
                "due day must be between 1 and {}, got {}",
                Self::MAX_DUE_DAY,
                self.due_day
            )));
        }

        if get_local_offset(&self.timezone).is_none() {
            return Err(Error::InvalidTimezone(self.timezone.clone()));
        }

        Ok(())
    }
}
