//! Monetary amounts and the rounding rule applied to every finalized value.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BillingError, Result};

/// Monetary amount in reais. Always a `Decimal`, never a float.
pub type Amount = Decimal;

/// Number of fractional digits kept on finalized amounts.
pub const CENTS_PLACES: u32 = 2;

/// Rounds to cents, half-up (0.005 becomes 0.01).
pub fn round2(value: Decimal) -> Amount {
    value.round_dp_with_strategy(CENTS_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

pub(crate) fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(BillingError::negative(field, value));
    }
    Ok(())
}

pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal, computing: &'static str) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or(BillingError::Overflow(computing))
}

pub(crate) fn checked_add(lhs: Decimal, rhs: Decimal, computing: &'static str) -> Result<Decimal> {
    lhs.checked_add(rhs).ok_or(BillingError::Overflow(computing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(10.005), dec!(10.01))]
    #[case(dec!(10.004), dec!(10.00))]
    #[case(dec!(9.899999), dec!(9.90))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(-0.125), dec!(-0.13))]
    fn test_round2(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round2(input), expected);
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("principal", dec!(0)).is_ok());
        assert!(ensure_non_negative("principal", dec!(-0.00)).is_ok());
        assert!(ensure_non_negative("principal", dec!(1)).is_ok());

        let err = ensure_non_negative("principal", dec!(-1)).unwrap_err();
        assert!(matches!(
            err,
            BillingError::InvalidArgument { field: "principal", .. }
        ));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        assert_eq!(checked_add(dec!(1), dec!(2), "sum").unwrap(), dec!(3));
        assert_eq!(checked_mul(dec!(1.5), dec!(2), "product").unwrap(), dec!(3.0));

        assert_eq!(
            checked_add(Decimal::MAX, dec!(1), "sum").unwrap_err(),
            BillingError::Overflow("sum")
        );
        assert_eq!(
            checked_mul(Decimal::MAX, dec!(2), "product").unwrap_err(),
            BillingError::Overflow("product")
        );
    }
}
