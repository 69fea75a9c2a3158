//! Database ID type definitions.

/// Alias for the integer type used for the `customers.id` column.
pub type CustomerId = i64;

/// Alias for the integer type used for the `credit_cards.id` column.
pub type CardId = i64;
