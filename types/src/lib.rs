//! Fundamental types for the Regen fee module.
//!
//! This crate defines the value types shared across the workspace: account
//! addresses, integer coin amounts, and the deterministic fixed-point decimal
//! used for governance-controlled fractions.

pub mod address;
pub mod coin;
pub mod dec;
pub mod error;

pub use address::AccAddress;
pub use coin::{Coin, Coins, BASE_DENOM};
pub use dec::{Dec, DEC_PRECISION};
pub use error::TypesError;
