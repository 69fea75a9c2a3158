//! Defines the crate level error type and the conversion from SQL errors.

/// The errors that may occur while generating a statement.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested customer or card could not be found.
    ///
    /// The caller should check that the customer ID and card ID are correct
    /// and that the card belongs to the customer.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("no matching customer and card could be found")]
    NotFound,

    /// An unhandled/unexpected SQL error, e.g. the store could not be opened
    /// or a query referenced a missing table.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The statement configuration contains a value that cannot be used.
    #[error("invalid statement configuration: {0}")]
    InvalidConfig(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// A total or balance does not fit in a decimal.
    ///
    /// This only happens with amounts far outside any real card limit, which
    /// usually means the stored data is corrupt.
    #[error("an amount is too large to calculate with")]
    AmountOverflow,

    /// The statement document could not be built or written to disk.
    ///
    /// Whatever may have been written to the output path should be discarded.
    #[error("could not render the statement: {0}")]
    Render(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
