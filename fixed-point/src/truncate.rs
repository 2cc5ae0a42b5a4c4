use alloy_primitives::{I256, U256};

use crate::scale::pow10;

/// Number of decimal digits in `value`, zero for zero.
pub fn significant_digits(value: U256) -> u32 {
    let ten = U256::from(10u8);
    let mut remaining = value;
    let mut digits = 0;

    while !remaining.is_zero() {
        remaining /= ten;
        digits += 1;
    }

    digits
}

/// Keeps the top `digits` significant digits of `value` and zeroes the rest.
///
/// `truncate_significant(123_456, 3) == 123_000`. Values that already fit are
/// returned unchanged.
pub fn truncate_significant(value: U256, digits: u32) -> U256 {
    let excess = significant_digits(value).saturating_sub(digits);
    if excess == 0 {
        return value;
    }

    let divisor = pow10(excess);
    value / divisor * divisor
}

/// Signed variant: truncates the magnitude and keeps the sign.
pub fn truncate_significant_signed(value: I256, digits: u32) -> I256 {
    let (sign, magnitude) = value.into_sign_and_abs();
    let truncated = truncate_significant(magnitude, digits);

    // A smaller magnitude with the same sign always fits
    I256::checked_from_sign_and_abs(sign, truncated).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn signed(value: i64) -> I256 {
        I256::try_from(value).unwrap()
    }

    #[test]
    fn truncates_positive_numbers() {
        assert_eq!(truncate_significant(U256::from(123_456u64), 3), U256::from(123_000u64));
    }

    #[test]
    fn leaves_short_numbers_alone() {
        assert_eq!(truncate_significant(U256::from(12u64), 3), U256::from(12u64));
        assert_eq!(truncate_significant(U256::from(123u64), 3), U256::from(123u64));
    }

    #[test]
    fn truncates_negative_numbers_on_magnitude() {
        assert_eq!(truncate_significant_signed(signed(-123_456), 3), signed(-123_000));
        assert_eq!(truncate_significant_signed(signed(123_456), 3), signed(123_000));
        assert_eq!(truncate_significant_signed(signed(-12), 3), signed(-12));
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(truncate_significant(U256::ZERO, 3), U256::ZERO);
        assert_eq!(truncate_significant_signed(I256::ZERO, 3), I256::ZERO);
    }

    #[test]
    fn wei_quantities_keep_five_digits() {
        let quantity = U256::from(18_001_999_999_999_999_475_712u128);

        assert_eq!(
            truncate_significant(quantity, 5),
            U256::from(18_001_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn counts_digits() {
        assert_eq!(significant_digits(U256::ZERO), 0);
        assert_eq!(significant_digits(U256::from(9u8)), 1);
        assert_eq!(significant_digits(U256::from(10u8)), 2);
        assert_eq!(significant_digits(U256::MAX), 78);
    }

    proptest! {
        #[test]
        fn truncation_never_grows_and_fits_budget(value in any::<u128>(), digits in 1u32..10) {
            let value = U256::from(value);
            let truncated = truncate_significant(value, digits);

            prop_assert!(truncated <= value);

            let excess = significant_digits(value).saturating_sub(digits);
            prop_assert!(value - truncated < pow10(excess));
            prop_assert!((truncated % pow10(excess)).is_zero());
            prop_assert_eq!(truncate_significant(truncated, digits), truncated);
        }
    }
}
