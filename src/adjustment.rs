//! Annual rent adjustment (reajuste).
//!
//! Leases are usually adjusted once a year, on the contract anniversary, by
//! the accumulated variation of an inflation index such as IGP-M or IPCA.
//! Deflation is allowed and lowers the rent.

use chrono::{Months, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::dates::today;
use crate::error::{BillingError, Result};
use crate::money::{Amount, checked_add, checked_mul, ensure_non_negative, round2};

/// Half-width, in days, of the window around the adjustment anniversary.
pub const ADJUSTMENT_WINDOW_DAYS: i64 = 30;

/// Decimal places kept on an accumulated index variation.
const INDEX_PLACES: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentAdjustmentResult {
    pub previous_value: Amount,
    pub adjustment_percent: Decimal,
    pub adjusted_value: Amount,
    pub difference: Amount,
}

/// Applies an index variation to the current rent.
///
/// # Errors
///
/// Returns [`BillingError::InvalidArgument`] if `current_value` is negative,
/// and [`BillingError::Overflow`] if the adjusted rent does not fit a `Decimal`.
pub fn calculate_adjustment(
    current_value: Amount,
    index_variation_percent: Decimal,
) -> Result<RentAdjustmentResult> {
    ensure_non_negative("current_value", current_value)?;

    let factor = checked_add(
        Decimal::ONE,
        index_variation_percent / dec!(100),
        "adjusted rent",
    )?;
    let adjusted_value = round2(checked_mul(current_value, factor, "adjusted rent")?);
    let difference = round2(adjusted_value - current_value);
    debug!("rent adjusted by {index_variation_percent}%: {current_value} -> {adjusted_value}");

    Ok(RentAdjustmentResult {
        previous_value: current_value,
        adjustment_percent: index_variation_percent,
        adjusted_value,
        difference,
    })
}

/// Compounds monthly index variations (in percent) into the accumulated
/// variation of the period, also in percent.
///
/// `[1.0, 1.0]` accumulates to `2.01`. An empty series accumulates to zero.
///
/// # Errors
///
/// Returns [`BillingError::Overflow`] when a long run of high readings
/// compounds past what a `Decimal` can hold.
pub fn accumulated_index_variation(monthly_percents: &[Decimal]) -> Result<Decimal> {
    let factor = monthly_percents.iter().try_fold(Decimal::ONE, |acc, pct| {
        let month = checked_add(Decimal::ONE, pct / dec!(100), "accumulated index")?;
        checked_mul(acc, month, "accumulated index")
    })?;

    let accumulated = checked_mul(factor - Decimal::ONE, dec!(100), "accumulated index")?;
    Ok(accumulated.round_dp(INDEX_PLACES))
}

/// The contract anniversary following `contract_start_date`.
///
/// A lease starting on February 29th is adjusted on February 28th.
///
/// # Errors
///
/// Returns [`BillingError::DateOutOfRange`] if the following year is past
/// the last representable date.
pub fn calculate_next_adjustment_date(contract_start_date: NaiveDate) -> Result<NaiveDate> {
    contract_start_date
        .checked_add_months(Months::new(12))
        .ok_or_else(|| {
            BillingError::DateOutOfRange(format!(
                "no anniversary after {contract_start_date}"
            ))
        })
}

/// Whether `reference_date` is within [`ADJUSTMENT_WINDOW_DAYS`] days, either
/// side, of the next adjustment date.
pub fn is_in_adjustment_window(
    contract_start_date: NaiveDate,
    reference_date: NaiveDate,
) -> Result<bool> {
    is_within_window(contract_start_date, reference_date, ADJUSTMENT_WINDOW_DAYS)
}

/// [`is_in_adjustment_window`] against the local calendar date.
pub fn is_in_adjustment_window_today(contract_start_date: NaiveDate) -> Result<bool> {
    is_in_adjustment_window(contract_start_date, today())
}

pub(crate) fn is_within_window(
    contract_start_date: NaiveDate,
    reference_date: NaiveDate,
    window_days: i64,
) -> Result<bool> {
    let anniversary = calculate_next_adjustment_date(contract_start_date)?;
    Ok((reference_date - anniversary).num_days().abs() <= window_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calculate_adjustment() {
        let result = calculate_adjustment(dec!(1000), dec!(5.0)).unwrap();

        assert_eq!(
            result,
            RentAdjustmentResult {
                previous_value: dec!(1000),
                adjustment_percent: dec!(5.0),
                adjusted_value: dec!(1050.00),
                difference: dec!(50.00),
            }
        );
    }

    #[rstest]
    #[case(dec!(1850.00), dec!(4.62), dec!(1935.47), dec!(85.47))]
    #[case(dec!(1200), dec!(-2.5), dec!(1170.00), dec!(-30.00))]
    #[case(dec!(1000), dec!(0), dec!(1000), dec!(0))]
    #[case(dec!(0), dec!(7), dec!(0), dec!(0))]
    fn test_calculate_adjustment_cases(
        #[case] current: Decimal,
        #[case] percent: Decimal,
        #[case] adjusted: Decimal,
        #[case] difference: Decimal,
    ) {
        let result = calculate_adjustment(current, percent).unwrap();
        assert_eq!(result.adjusted_value, adjusted);
        assert_eq!(result.difference, difference);
    }

    #[test]
    fn test_calculate_adjustment_rejects_negative_rent() {
        assert!(matches!(
            calculate_adjustment(dec!(-1), dec!(5)),
            Err(BillingError::InvalidArgument { field: "current_value", .. })
        ));
    }

    #[rstest]
    #[case(&[], dec!(0))]
    #[case(&[dec!(1.0), dec!(1.0)], dec!(2.01))]
    #[case(&[dec!(0.5), dec!(-0.5)], dec!(-0.0025))]
    #[case(&[dec!(10)], dec!(10))]
    fn test_accumulated_index_variation(#[case] monthly: &[Decimal], #[case] expected: Decimal) {
        assert_eq!(accumulated_index_variation(monthly).unwrap(), expected);
    }

    #[test]
    fn test_accumulated_index_variation_overflow() {
        let doubling_every_month = [dec!(100); 200];
        assert_eq!(
            accumulated_index_variation(&doubling_every_month).unwrap_err(),
            BillingError::Overflow("accumulated index")
        );
    }

    #[test]
    fn test_calculate_adjustment_overflow() {
        assert_eq!(
            calculate_adjustment(Decimal::MAX, dec!(50)).unwrap_err(),
            BillingError::Overflow("adjusted rent")
        );
    }

    #[rstest]
    #[case(date(2024, 3, 15), date(2025, 3, 15))]
    #[case(date(2023, 12, 31), date(2024, 12, 31))]
    #[case(date(2024, 2, 29), date(2025, 2, 28))]
    #[case(date(2023, 2, 28), date(2024, 2, 28))]
    fn test_calculate_next_adjustment_date(#[case] start: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(calculate_next_adjustment_date(start).unwrap(), expected);
    }

    #[test]
    fn test_next_adjustment_date_out_of_range() {
        assert!(matches!(
            calculate_next_adjustment_date(NaiveDate::MAX),
            Err(BillingError::DateOutOfRange(_))
        ));
    }

    #[rstest]
    #[case(date(2025, 3, 15), true)]
    #[case(date(2025, 2, 13), true)]
    #[case(date(2025, 2, 12), false)]
    #[case(date(2025, 4, 14), true)]
    #[case(date(2025, 4, 15), false)]
    #[case(date(2024, 3, 15), false)]
    fn test_is_in_adjustment_window(#[case] reference: NaiveDate, #[case] expected: bool) {
        assert_eq!(
            is_in_adjustment_window(date(2024, 3, 15), reference).unwrap(),
            expected
        );
    }

    #[test]
    fn test_is_in_adjustment_window_today() {
        let start = today()
            .checked_sub_months(Months::new(12))
            .unwrap();
        assert!(is_in_adjustment_window_today(start).unwrap());
    }
}
