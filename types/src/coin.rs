//! Integer monetary amounts.
//!
//! Every amount that crosses a ledger boundary is a whole number of base
//! units (u128) in a single denomination. Fractions exist only inside
//! [`Dec`](crate::Dec) arithmetic and are truncated before they leave it.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The chain's base denomination.
pub const BASE_DENOM: &str = "uregen";

/// A single-denomination amount of base units.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Shorthand for an amount in [`BASE_DENOM`].
    pub fn uregen(amount: u128) -> Self {
        Self::new(BASE_DENOM, amount)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Same denomination, different amount.
    pub fn with_amount(&self, amount: u128) -> Self {
        Self::new(self.denom.clone(), amount)
    }

    /// Check the denom against `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
    pub fn validate(&self) -> Result<(), TypesError> {
        validate_denom(&self.denom)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

pub fn validate_denom(denom: &str) -> Result<(), TypesError> {
    let mut bytes = denom.bytes();
    let first_ok = bytes.next().is_some_and(|b| b.is_ascii_alphabetic());
    let rest_ok = bytes.all(|b| b.is_ascii_alphanumeric() || b"/:._-".contains(&b));
    if !first_ok || !rest_ok || !(3..=128).contains(&denom.len()) {
        return Err(TypesError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}

/// A bundle of coins handed to the ledger in one call.
///
/// Zero amounts are dropped on construction, so an empty bundle means
/// "nothing to move".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Amount held in `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        if coin.is_zero() {
            Self::empty()
        } else {
            Self(vec![coin])
        }
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
