//! Error types for metric inputs.

use thiserror::Error;

/// Errors raised by the strict parsers.
///
/// Aggregation itself never fails; these surface only through
/// [`try_parse_money`](crate::money::try_parse_money), [`Period`](crate::Period)
/// parsing and as ingest warnings on the snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Money string with no parseable number in it.
    #[error("invalid money value: {0:?}")]
    InvalidMoney(String),

    /// Period not in `YYYY-MM` form.
    #[error("invalid period {0:?}: expected YYYY-MM")]
    InvalidPeriod(String),
}

/// Result type alias for metric parsing.
pub type Result<T> = std::result::Result<T, MetricsError>;
