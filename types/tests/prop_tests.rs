use proptest::prelude::*;

use regen_types::{AccAddress, Coin, Coins, Dec};

const ONE: i128 = 1_000_000_000_000_000_000;

proptest! {
    /// Truncating multiply agrees with exact wide arithmetic where it fits.
    #[test]
    fn mul_int_trunc_matches_exact_product(
        amount in 0u128..100_000_000_000_000_000_000,
        raw in 0i128..=ONE,
    ) {
        let expected = amount * raw as u128 / ONE as u128;
        prop_assert_eq!(Dec::from_raw(raw).mul_int_trunc(amount), Some(expected as i128));
    }

    /// Negation commutes with truncating multiply (truncation is toward zero).
    #[test]
    fn mul_int_trunc_is_symmetric_in_sign(amount in 0u128..1_000_000_000_000, raw in 0i128..=ONE * 3) {
        let pos = Dec::from_raw(raw).mul_int_trunc(amount).unwrap();
        let neg = Dec::from_raw(-raw).mul_int_trunc(amount).unwrap();
        prop_assert_eq!(pos, -neg);
    }

    /// A fraction at most one never yields more than the principal.
    #[test]
    fn fraction_of_amount_never_exceeds_amount(amount in any::<u64>(), raw in 0i128..=ONE) {
        let part = Dec::from_raw(raw).mul_int_trunc(amount as u128).unwrap();
        prop_assert!(part >= 0);
        prop_assert!(part as u128 <= amount as u128);
    }

    /// Display output parses back to the same value.
    #[test]
    fn display_parses_back(raw in any::<i64>()) {
        let d = Dec::from_raw(raw as i128 * 1_000);
        let parsed: Dec = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    /// Ordering on decimals follows ordering on raw values.
    #[test]
    fn ordering_follows_raw(a in any::<i64>(), b in any::<i64>()) {
        let (da, db) = (Dec::from_raw(a as i128), Dec::from_raw(b as i128));
        prop_assert_eq!(da <= db, a <= b);
    }

    /// Coins built from a coin are empty exactly when the amount is zero.
    #[test]
    fn coins_drop_zero_amounts(amount in 0u128..1_000) {
        let coins = Coins::from(Coin::uregen(amount));
        prop_assert_eq!(coins.is_empty(), amount == 0);
        prop_assert_eq!(coins.amount_of("uregen"), amount);
    }

    /// Module addresses are stable and always parse as addresses.
    #[test]
    fn module_addresses_are_valid(name in "[a-z]{1,24}") {
        let addr = AccAddress::for_module(&name);
        prop_assert_eq!(&addr, &AccAddress::for_module(&name));
        prop_assert!(AccAddress::new(addr.as_str()).is_ok());
    }
}
