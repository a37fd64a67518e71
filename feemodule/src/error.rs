//! Fee module errors.

use crate::expected_keepers::CollaboratorError;
use regen_types::{AccAddress, Dec, TypesError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("invalid fee rate {fee_rate}: must be within [0, {max_fee_rate}]")]
    InvalidFeeRate { fee_rate: Dec, max_fee_rate: Dec },

    #[error("shares must sum to 1.0, got {sum}")]
    InvalidShareSum { sum: Dec },

    /// A leg came out negative or larger than the fee. Only reachable with
    /// share values outside [0, 1], which the validator does not reject.
    #[error("fee {fee} splits into burn={burn} validators={validators} community={community}")]
    InvalidSplit {
        fee: u128,
        burn: i128,
        validators: i128,
        community: i128,
    },

    #[error("unauthorized params update: expected authority {expected}, got {got}")]
    Unauthorized { expected: AccAddress, got: AccAddress },

    #[error("invalid coin: {0}")]
    InvalidCoin(TypesError),

    #[error("arithmetic overflow in fee computation")]
    Overflow,

    #[error("config error: {0}")]
    Config(String),

    /// Ledger, validator-reward or treasury failure, passed through unchanged.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
