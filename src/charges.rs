//! Late-payment charges: multa (penalty) and juros de mora (late interest).
//!
//! The penalty is a one-off percentage of the amount due. Late interest is
//! simple per-diem accrual: the default of 0.033% a day approximates the
//! usual 1% a month over a 30 day month, it is not compounded.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};
use crate::money::{Amount, checked_add, checked_mul, ensure_non_negative, round2};

/// Multa applied when no percentage is configured (2%).
pub const DEFAULT_PENALTY_PERCENT: Decimal = dec!(2.0);

/// Daily juros de mora applied when no percentage is configured (0.033% a day).
pub const DEFAULT_DAILY_INTEREST_PERCENT: Decimal = dec!(0.033);

/// Optional knobs for [`calculate_total_with_penalty_and_interest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeOptions {
    /// Discount granted on the principal before charges are computed.
    pub discount: Option<Amount>,
    /// Penalty percentage, defaults to [`DEFAULT_PENALTY_PERCENT`].
    pub penalty_percent: Option<Decimal>,
    /// Daily interest percentage, defaults to [`DEFAULT_DAILY_INTEREST_PERCENT`].
    pub daily_interest_percent: Option<Decimal>,
}

/// Amount due for a given lateness.
///
/// `discount` and `base_amount` are only present when a positive discount
/// was granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub principal: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<Amount>,
    pub penalty: Amount,
    pub interest: Amount,
    pub total: Amount,
}

/// Calculates the multa as a percentage of `principal`.
///
/// # Errors
///
/// Returns [`BillingError::InvalidArgument`] if `principal` or `percent` is
/// negative, and [`BillingError::Overflow`] if the product does not fit a `Decimal`.
pub fn calculate_penalty(principal: Amount, percent: Decimal) -> Result<Amount> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("percent", percent)?;

    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    Ok(round2(checked_mul(principal, percent, "penalty")? / dec!(100)))
}

/// Calculates simple juros de mora accrued over `days_late` days.
///
/// # Errors
///
/// Returns [`BillingError::InvalidArgument`] if any argument is negative, and
/// [`BillingError::Overflow`] if the accrual does not fit a `Decimal`.
pub fn calculate_late_interest(
    principal: Amount,
    days_late: i64,
    daily_percent: Decimal,
) -> Result<Amount> {
    ensure_non_negative("principal", principal)?;
    ensure_days_late(days_late)?;
    ensure_non_negative("daily_percent", daily_percent)?;

    if principal.is_zero() || days_late == 0 {
        return Ok(Decimal::ZERO);
    }

    let daily = checked_mul(principal, daily_percent, "late interest")? / dec!(100);
    Ok(round2(checked_mul(
        daily,
        Decimal::from(days_late),
        "late interest",
    )?))
}

/// Composes discount, multa and juros into the total due.
///
/// Charges are computed on the discounted base. When the installment is not
/// late, no charges apply and the total is the base itself.
///
/// # Errors
///
/// Returns [`BillingError::InvalidArgument`] if `principal`, `days_late`,
/// the discount or a percentage is negative, or if the discount is larger
/// than the principal, and [`BillingError::Overflow`] if the total does not
/// fit a `Decimal`.
pub fn calculate_total_with_penalty_and_interest(
    principal: Amount,
    days_late: i64,
    options: &ChargeOptions,
) -> Result<ChargeBreakdown> {
    ensure_non_negative("principal", principal)?;
    ensure_days_late(days_late)?;

    let penalty_percent = options.penalty_percent.unwrap_or(DEFAULT_PENALTY_PERCENT);
    let daily_interest_percent = options
        .daily_interest_percent
        .unwrap_or(DEFAULT_DAILY_INTEREST_PERCENT);
    ensure_non_negative("penalty_percent", penalty_percent)?;
    ensure_non_negative("daily_interest_percent", daily_interest_percent)?;

    let discount = options.discount.unwrap_or(Decimal::ZERO);
    ensure_non_negative("discount", discount)?;
    if discount > principal {
        return Err(BillingError::InvalidArgument {
            field: "discount",
            reason: format!("must not exceed the principal of {principal} (got {discount})"),
        });
    }

    let base_amount = principal - discount;
    let (discount, shown_base) = if discount > Decimal::ZERO {
        (Some(discount), Some(base_amount))
    } else {
        (None, None)
    };

    if days_late == 0 {
        return Ok(ChargeBreakdown {
            principal,
            discount,
            base_amount: shown_base,
            penalty: Decimal::ZERO,
            interest: Decimal::ZERO,
            total: base_amount,
        });
    }

    let penalty = calculate_penalty(base_amount, penalty_percent)?;
    let interest = calculate_late_interest(base_amount, days_late, daily_interest_percent)?;
    let total = checked_add(
        checked_add(base_amount, penalty, "total due")?,
        interest,
        "total due",
    )?;

    Ok(ChargeBreakdown {
        principal,
        discount,
        base_amount: shown_base,
        penalty,
        interest,
        total: round2(total),
    })
}

fn ensure_days_late(days_late: i64) -> Result<()> {
    if days_late < 0 {
        return Err(BillingError::InvalidArgument {
            field: "days_late",
            reason: format!("must not be negative (got {days_late})"),
        });
    }
    Ok(())
}
