//! Account addresses with the `regen1` prefix.

use crate::error::TypesError;
use blake2::digest::consts::U20;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Regen account address, always prefixed with `regen1`.
///
/// User accounts arrive from the host already formed; module accounts are
/// derived from the module name with [`AccAddress::for_module`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccAddress(String);

impl AccAddress {
    /// The standard prefix for all Regen account addresses.
    pub const PREFIX: &'static str = "regen1";

    /// Parse an address, rejecting anything without the `regen1` prefix.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if !s.starts_with(Self::PREFIX) || s.len() == Self::PREFIX.len() {
            return Err(TypesError::InvalidAddress(s));
        }
        if !s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            return Err(TypesError::InvalidAddress(s));
        }
        Ok(Self(s))
    }

    /// Deterministic holding-account address for a module.
    ///
    /// Blake2b-160 of the module name, hex encoded after the prefix. Every
    /// node derives the same address without any stored state.
    pub fn for_module(module_name: &str) -> Self {
        let mut hasher = Blake2b::<U20>::new();
        hasher.update(b"module:");
        hasher.update(module_name.as_bytes());
        Self(format!("{}{}", Self::PREFIX, hex::encode(hasher.finalize())))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AccAddress {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AccAddress> for String {
    fn from(address: AccAddress) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_foreign_prefix() {
        assert!(AccAddress::new("cosmos1abc").is_err());
        assert!(AccAddress::new("regen1").is_err());
        assert!(AccAddress::new("regen1ABC").is_err());
        assert!(AccAddress::new("regen1payer").is_ok());
    }

    #[test]
    fn module_address_is_deterministic() {
        let a = AccAddress::for_module("feemodule");
        let b = AccAddress::for_module("feemodule");
        assert_eq!(a, b);
        assert_ne!(a, AccAddress::for_module("distribution"));
        // prefix + 20 bytes hex
        assert_eq!(a.as_str().len(), AccAddress::PREFIX.len() + 40);
        assert!(AccAddress::new(a.as_str()).is_ok());
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let ok: Result<AccAddress, _> = serde_json::from_str("\"regen1treasury\"");
        assert!(ok.is_ok());
        let bad: Result<AccAddress, _> = serde_json::from_str("\"cosmos1wallet\"");
        assert!(bad.is_err());
    }
}
