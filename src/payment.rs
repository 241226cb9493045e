//! Partial payment allocation over an outstanding installment.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};
use crate::money::{Amount, checked_add, ensure_non_negative, round2};

/// What is currently owed on an installment, split by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub principal: Amount,
    pub penalty: Amount,
    pub interest: Amount,
}

impl Debt {
    /// Builds a debt, rejecting negative categories.
    pub fn new(principal: Amount, penalty: Amount, interest: Amount) -> Result<Self> {
        let debt = Debt {
            principal,
            penalty,
            interest,
        };
        debt.validate()?;
        Ok(debt)
    }

    /// Sum of the three categories.
    pub fn total(&self) -> Result<Amount> {
        let charges = checked_add(self.penalty, self.interest, "total owed")?;
        checked_add(self.principal, charges, "total owed")
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_non_negative("penalty", self.penalty)?;
        ensure_non_negative("interest", self.interest)
    }
}

/// State of a [`Debt`] after a payment was applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAllocationResult {
    pub principal: Amount,
    pub penalty: Amount,
    pub interest: Amount,
    pub amount_paid: Amount,
    pub remaining_balance: Amount,
    /// Only serialized when the debt is fully paid.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub settled: bool,
}

impl PaymentAllocationResult {
    /// The debt left over, ready to receive the next payment.
    pub fn as_debt(&self) -> Debt {
        Debt {
            principal: self.principal,
            penalty: self.penalty,
            interest: self.interest,
        }
    }
}

/// Applies `amount_paid` to `debt`, clearing interest first, then the
/// penalty, then the principal.
///
/// Every intermediate subtraction is rounded to cents so that chaining
/// partial payments through [`PaymentAllocationResult::as_debt`] never
/// accumulates sub-cent residue.
///
/// # Errors
///
/// Returns [`BillingError::InvalidArgument`] for a negative payment or debt
/// category, and [`BillingError::PaymentExceedsDebt`] when the payment is
/// larger than the total owed. Overpayment is never clamped. A debt whose
/// total does not fit a `Decimal` is reported as [`BillingError::Overflow`].
pub fn apply_partial_payment(debt: &Debt, amount_paid: Amount) -> Result<PaymentAllocationResult> {
    debt.validate()?;
    ensure_non_negative("amount_paid", amount_paid)?;

    let total_owed = debt.total()?;
    if amount_paid > total_owed {
        warn!("rejected payment of {amount_paid} over a debt of {total_owed}");
        return Err(BillingError::PaymentExceedsDebt {
            amount_paid,
            total_owed,
        });
    }

    let mut remaining = amount_paid;
    let interest = settle(debt.interest, &mut remaining);
    let penalty = settle(debt.penalty, &mut remaining);
    let principal = settle(debt.principal, &mut remaining);

    let left = Debt {
        principal,
        penalty,
        interest,
    };
    let remaining_balance = round2(left.total()?);
    debug!(
        "payment of {amount_paid}: interest {} -> {interest}, penalty {} -> {penalty}, principal {} -> {principal}",
        debt.interest, debt.penalty, debt.principal
    );

    Ok(PaymentAllocationResult {
        principal,
        penalty,
        interest,
        amount_paid,
        remaining_balance,
        settled: remaining_balance.is_zero(),
    })
}

/// Pays as much of `bucket` as `remaining` allows and returns what is left
/// in the bucket.
fn settle(bucket: Amount, remaining: &mut Amount) -> Amount {
    let paid = (*remaining).min(bucket);
    *remaining = round2(*remaining - paid);
    round2(bucket - paid)
}
