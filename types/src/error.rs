//! Errors raised while constructing or parsing the shared value types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid decimal: {0:?}")]
    InvalidDecimal(String),

    #[error("decimal {0:?} has more than 18 fractional digits")]
    DecimalPrecision(String),

    #[error("invalid denom: {0:?}")]
    InvalidDenom(String),

    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("arithmetic overflow")]
    Overflow,
}
