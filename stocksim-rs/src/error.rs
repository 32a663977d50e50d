//! Error types for the simulation crate

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the price model and the price history.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A configuration value is outside its valid range.
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    /// A price that is zero, negative, NaN or infinite.
    #[error("price must be finite and strictly positive, got {0}")]
    InvalidPrice(f64),

    /// A point dated before the last recorded point.
    #[error("point dated {date} is older than the last recorded date {last}")]
    OutOfOrder {
        /// Date of the rejected point.
        date: NaiveDate,
        /// Last date already in the history.
        last: NaiveDate,
    },
}
