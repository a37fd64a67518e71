//! Governance-controlled fee parameters.
//!
//! A `Params` value is never edited in place. Governance produces a whole new
//! set through [`apply_update`], and the host hands the current set to every
//! call by reference.

use crate::error::FeeError;
use regen_types::{AccAddress, Dec};
use serde::{Deserialize, Serialize};

/// Fee rate and the three-way split of every collected fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    fee_rate: Dec,
    burn_share: Dec,
    validator_share: Dec,
    community_share: Dec,
    max_fee_rate: Dec,
}

impl Params {
    pub fn new(
        fee_rate: Dec,
        burn_share: Dec,
        validator_share: Dec,
        community_share: Dec,
        max_fee_rate: Dec,
    ) -> Self {
        Self {
            fee_rate,
            burn_share,
            validator_share,
            community_share,
            max_fee_rate,
        }
    }

    /// Proportion of the transacted value taken as fee.
    pub fn fee_rate(&self) -> Dec {
        self.fee_rate
    }

    pub fn burn_share(&self) -> Dec {
        self.burn_share
    }

    pub fn validator_share(&self) -> Dec {
        self.validator_share
    }

    /// Informational only: the community leg is always the remainder.
    pub fn community_share(&self) -> Dec {
        self.community_share
    }

    /// Safety ceiling on `fee_rate`.
    pub fn max_fee_rate(&self) -> Dec {
        self.max_fee_rate
    }

    /// Check internal consistency.
    ///
    /// 1. `0 <= fee_rate <= max_fee_rate`
    /// 2. `burn_share + validator_share + community_share == 1` exactly
    ///
    /// Individual shares are not range checked: `1.5 / -0.5 / 0` passes.
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.fee_rate.is_negative() || self.fee_rate > self.max_fee_rate {
            return Err(FeeError::InvalidFeeRate {
                fee_rate: self.fee_rate,
                max_fee_rate: self.max_fee_rate,
            });
        }
        let sum = self.share_sum().ok_or(FeeError::Overflow)?;
        if sum != Dec::ONE {
            return Err(FeeError::InvalidShareSum { sum });
        }
        Ok(())
    }

    fn share_sum(&self) -> Option<Dec> {
        self.burn_share
            .checked_add(self.validator_share)?
            .checked_add(self.community_share)
    }
}

/// 2% fee; half burned, a quarter each to validators and the community
/// pool; never more than 5%.
impl Default for Params {
    fn default() -> Self {
        Self {
            fee_rate: Dec::from_percent(2),
            burn_share: Dec::from_percent(50),
            validator_share: Dec::from_percent(25),
            community_share: Dec::from_percent(25),
            max_fee_rate: Dec::from_percent(5),
        }
    }
}

/// Governance message replacing the whole parameter set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: AccAddress,
    pub params: Params,
}

/// Produce the parameter set that replaces `current` after a governance
/// update. `current` is left untouched whether or not the update succeeds.
pub fn apply_update(
    current: &Params,
    msg: MsgUpdateParams,
    expected_authority: &AccAddress,
) -> Result<Params, FeeError> {
    if msg.authority != *expected_authority {
        return Err(FeeError::Unauthorized {
            expected: expected_authority.clone(),
            got: msg.authority,
        });
    }
    msg.params.validate()?;
    tracing::info!(
        old_fee_rate = %current.fee_rate,
        new_fee_rate = %msg.params.fee_rate,
        "fee params replaced"
    );
    Ok(msg.params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    fn params(fee: &str, burn: &str, val: &str, com: &str, max: &str) -> Params {
        Params::new(dec(fee), dec(burn), dec(val), dec(com), dec(max))
    }

    #[test]
    fn defaults_are_valid() {
        let p = Params::default();
        p.validate().unwrap();
        assert_eq!(p.fee_rate(), dec("0.02"));
        assert_eq!(p.max_fee_rate(), dec("0.05"));
    }

    #[test]
    fn fee_rate_above_cap_rejected() {
        let err = params("0.06", "0.5", "0.25", "0.25", "0.05").validate().unwrap_err();
        assert!(matches!(err, FeeError::InvalidFeeRate { .. }));
    }

    #[test]
    fn negative_fee_rate_rejected() {
        let err = params("-0.01", "0.5", "0.25", "0.25", "0.05").validate().unwrap_err();
        assert!(matches!(err, FeeError::InvalidFeeRate { .. }));
    }

    #[test]
    fn fee_rate_equal_to_cap_accepted() {
        params("0.05", "0.5", "0.25", "0.25", "0.05").validate().unwrap();
        params("0", "0.5", "0.25", "0.25", "0").validate().unwrap();
    }

    #[test]
    fn share_sum_reported_on_mismatch() {
        let err = params("0.02", "0.5", "0.25", "0.2", "0.05").validate().unwrap_err();
        assert_eq!(err, FeeError::InvalidShareSum { sum: dec("0.95") });
        assert!(err.to_string().contains("0.950000000000000000"));
    }

    #[test]
    fn share_sum_has_no_tolerance() {
        let third = "0.333333333333333333";
        let err = params("0.02", third, third, third, "0.05").validate().unwrap_err();
        assert_eq!(
            err,
            FeeError::InvalidShareSum {
                sum: dec("0.999999999999999999")
            }
        );
    }

    #[test]
    fn fee_rate_checked_before_shares() {
        let err = params("0.1", "0.5", "0.5", "0.5", "0.05").validate().unwrap_err();
        assert!(matches!(err, FeeError::InvalidFeeRate { .. }));
    }

    #[test]
    fn out_of_range_shares_still_pass_sum_check() {
        params("0.02", "1.5", "-0.5", "0", "0.05").validate().unwrap();
    }

    #[test]
    fn update_requires_authority() {
        let gov = AccAddress::for_module("gov");
        let current = Params::default();
        let msg = MsgUpdateParams {
            authority: AccAddress::new("regen1intruder").unwrap(),
            params: params("0.03", "0.5", "0.25", "0.25", "0.05"),
        };
        let err = apply_update(&current, msg, &gov).unwrap_err();
        assert!(matches!(err, FeeError::Unauthorized { .. }));
    }

    #[test]
    fn update_validates_and_replaces_whole_set() {
        let gov = AccAddress::for_module("gov");
        let current = Params::default();
        let next = params("0.03", "0.4", "0.4", "0.2", "0.05");
        let updated = apply_update(
            &current,
            MsgUpdateParams { authority: gov.clone(), params: next },
            &gov,
        )
        .unwrap();
        assert_eq!(updated, next);
        assert_eq!(current, Params::default());

        let bad = MsgUpdateParams {
            authority: gov.clone(),
            params: params("0.03", "0.4", "0.4", "0.4", "0.05"),
        };
        assert!(matches!(
            apply_update(&current, bad, &gov),
            Err(FeeError::InvalidShareSum { .. })
        ));
    }

    #[test]
    fn serde_round_trips_decimal_strings() {
        let json = serde_json::to_string(&Params::default()).unwrap();
        assert!(json.contains("\"fee_rate\":\"0.020000000000000000\""));
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Params::default());
    }
}
