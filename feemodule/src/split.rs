//! Fee and split arithmetic.
//!
//! Both steps truncate toward zero, so the payer is never charged more than
//! the exact proportional fee. The community leg is the remainder of the
//! other two rather than `fee * community_share`, which makes the three legs
//! add up to the fee exactly no matter how the first two truncate.

use crate::error::FeeError;
use crate::params::Params;
use serde::{Deserialize, Serialize};

/// `trunc(amount * fee_rate)`.
pub fn compute_fee(amount: u128, params: &Params) -> Result<u128, FeeError> {
    let fee = params
        .fee_rate()
        .mul_int_trunc(amount)
        .ok_or(FeeError::Overflow)?;
    u128::try_from(fee).map_err(|_| FeeError::InvalidFeeRate {
        fee_rate: params.fee_rate(),
        max_fee_rate: params.max_fee_rate(),
    })
}

/// Integer partition of one collected fee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub burn: u128,
    pub validators: u128,
    pub community: u128,
}

impl FeeSplit {
    /// Partition `fee` by the burn and validator shares, remainder to the
    /// community.
    ///
    /// Fails with [`FeeError::InvalidSplit`] if any leg would be negative or
    /// exceed the fee, which only happens with shares outside [0, 1].
    pub fn compute(fee: u128, params: &Params) -> Result<Self, FeeError> {
        let burn = params
            .burn_share()
            .mul_int_trunc(fee)
            .ok_or(FeeError::Overflow)?;
        let validators = params
            .validator_share()
            .mul_int_trunc(fee)
            .ok_or(FeeError::Overflow)?;
        let community = i128::try_from(fee)
            .ok()
            .and_then(|f| f.checked_sub(burn))
            .and_then(|r| r.checked_sub(validators))
            .ok_or(FeeError::Overflow)?;

        let leg = |v: i128| u128::try_from(v).ok().filter(|v| *v <= fee);
        match (leg(burn), leg(validators), leg(community)) {
            (Some(burn), Some(validators), Some(community)) => Ok(Self {
                burn,
                validators,
                community,
            }),
            _ => Err(FeeError::InvalidSplit {
                fee,
                burn,
                validators,
                community,
            }),
        }
    }

    pub fn total(&self) -> u128 {
        self.burn + self.validators + self.community
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regen_types::Dec;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    fn shares(burn: &str, val: &str, com: &str) -> Params {
        Params::new(dec("0.02"), dec(burn), dec(val), dec(com), dec("0.05"))
    }

    #[test]
    fn two_percent_of_a_thousand() {
        assert_eq!(compute_fee(1000, &Params::default()).unwrap(), 20);
    }

    #[test]
    fn fee_truncates() {
        // 49 * 0.02 = 0.98
        assert_eq!(compute_fee(49, &Params::default()).unwrap(), 0);
        // 149 * 0.02 = 2.98
        assert_eq!(compute_fee(149, &Params::default()).unwrap(), 2);
    }

    #[test]
    fn default_split_of_twenty() {
        let split = FeeSplit::compute(20, &Params::default()).unwrap();
        assert_eq!(
            split,
            FeeSplit {
                burn: 10,
                validators: 5,
                community: 5
            }
        );
    }

    #[test]
    fn remainder_absorbs_truncation() {
        let split = FeeSplit::compute(7, &Params::default()).unwrap();
        assert_eq!(
            split,
            FeeSplit {
                burn: 3,
                validators: 1,
                community: 3
            }
        );
        assert_eq!(split.total(), 7);
    }

    #[test]
    fn thirds_leave_dust_to_community() {
        let p = shares("0.333333333333333333", "0.333333333333333333", "0.333333333333333334");
        let split = FeeSplit::compute(100, &p).unwrap();
        assert_eq!(split.burn, 33);
        assert_eq!(split.validators, 33);
        assert_eq!(split.community, 34);
    }

    #[test]
    fn zero_fee_splits_to_zero() {
        assert_eq!(FeeSplit::compute(0, &Params::default()).unwrap(), FeeSplit::default());
    }

    #[test]
    fn negative_share_is_not_dispatchable() {
        let err = FeeSplit::compute(10, &shares("1.5", "-0.5", "0")).unwrap_err();
        assert_eq!(
            err,
            FeeError::InvalidSplit {
                fee: 10,
                burn: 15,
                validators: -5,
                community: 0
            }
        );
    }

    #[test]
    fn oversized_share_is_not_dispatchable() {
        // burn takes everything and more, community goes negative
        let err = FeeSplit::compute(10, &shares("1.2", "0", "-0.2")).unwrap_err();
        assert!(matches!(err, FeeError::InvalidSplit { community: -2, .. }));
    }
}
