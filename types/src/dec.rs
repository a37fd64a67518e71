//! Deterministic fixed-point decimal.
//!
//! A `Dec` is a signed integer scaled by 10^18, the same precision the host
//! chain uses for governance-controlled fractions. No floating point is ever
//! involved, so every validating node computes bit-identical results.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional decimal digits.
pub const DEC_PRECISION: u32 = 18;

/// Raw value of `1.0`.
const ONE_RAW: i128 = 1_000_000_000_000_000_000;
const ONE_RAW_U: u128 = ONE_RAW as u128;

/// Signed 18-decimal fixed-point number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(i128);

impl Dec {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE_RAW);

    /// Wrap a raw value already scaled by 10^18.
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i128 {
        self.0
    }

    /// Convert a whole number into a decimal. Returns `None` on overflow.
    pub fn from_int(value: i128) -> Option<Self> {
        value.checked_mul(ONE_RAW).map(Self)
    }

    /// `value` hundredths, e.g. `from_percent(2)` is `0.02`.
    pub const fn from_percent(value: i64) -> Self {
        Self(value as i128 * (ONE_RAW / 100))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiply an integer amount by this decimal and truncate toward zero.
    ///
    /// `trunc(amount * self)` is evaluated without ever forming the full
    /// `amount * raw` product, so intermediates only overflow when the
    /// result itself does not fit an `i128`.
    pub fn mul_int_trunc(&self, amount: u128) -> Option<i128> {
        let magnitude = self.0.unsigned_abs();
        let (amount_whole, amount_frac) = (amount / ONE_RAW_U, amount % ONE_RAW_U);
        let (mag_whole, mag_frac) = (magnitude / ONE_RAW_U, magnitude % ONE_RAW_U);

        // amount * mag / ONE
        //   = amount_whole * mag + amount_frac * mag_whole + amount_frac * mag_frac / ONE
        let product = amount_whole
            .checked_mul(magnitude)?
            .checked_add(amount_frac.checked_mul(mag_whole)?)?
            .checked_add(amount_frac * mag_frac / ONE_RAW_U)?;

        let product = i128::try_from(product).ok()?;
        Some(if self.0 < 0 { -product } else { product })
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / ONE_RAW_U,
            magnitude % ONE_RAW_U,
            width = DEC_PRECISION as usize
        )
    }
}

impl FromStr for Dec {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidDecimal(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) || body.ends_with('.') {
            return Err(invalid());
        }
        if frac.len() > DEC_PRECISION as usize {
            return Err(TypesError::DecimalPrecision(s.to_string()));
        }

        let whole: i128 = whole.parse().map_err(|_| invalid())?;
        let frac_raw: i128 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac, width = DEC_PRECISION as usize);
            padded.parse().map_err(|_| invalid())?
        };

        let raw = whole
            .checked_mul(ONE_RAW)
            .and_then(|w| w.checked_add(frac_raw))
            .ok_or(TypesError::Overflow)?;
        Ok(Self(if negative { -raw } else { raw }))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
