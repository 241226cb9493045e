//! Billing policy configured per landlord or portfolio.

use anyhow::{Context, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adjustment::{ADJUSTMENT_WINDOW_DAYS, is_within_window};
use crate::charges::{
    ChargeBreakdown, ChargeOptions, DEFAULT_DAILY_INTEREST_PERCENT, DEFAULT_PENALTY_PERCENT,
    calculate_total_with_penalty_and_interest,
};
use crate::dates::calculate_days_late;
use crate::error::Result;
use crate::money::Amount;

/// Rates and windows used when billing an installment.
///
/// Any field missing from a serialized policy falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingPolicy {
    /// Multa as a percentage of the amount due.
    pub penalty_percent: Decimal,
    /// Juros de mora per day late, as a percentage.
    pub daily_interest_percent: Decimal,
    /// Days either side of the anniversary in which the rent may be adjusted.
    pub adjustment_window_days: i64,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            penalty_percent: DEFAULT_PENALTY_PERCENT,
            daily_interest_percent: DEFAULT_DAILY_INTEREST_PERCENT,
            adjustment_window_days: ADJUSTMENT_WINDOW_DAYS,
        }
    }
}

impl BillingPolicy {
    /// Parses a policy from JSON and checks that no rate or window is negative.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let policy: BillingPolicy =
            serde_json::from_str(json).context("Failed to parse billing policy")?;

        if policy.penalty_percent < Decimal::ZERO {
            bail!("penalty_percent cannot be negative: {}", policy.penalty_percent);
        }
        if policy.daily_interest_percent < Decimal::ZERO {
            bail!(
                "daily_interest_percent cannot be negative: {}",
                policy.daily_interest_percent
            );
        }
        if policy.adjustment_window_days < 0 {
            bail!(
                "adjustment_window_days cannot be negative: {}",
                policy.adjustment_window_days
            );
        }

        Ok(policy)
    }

    /// Charge options carrying this policy's rates and the given discount.
    pub fn charge_options(&self, discount: Option<Amount>) -> ChargeOptions {
        ChargeOptions {
            discount,
            penalty_percent: Some(self.penalty_percent),
            daily_interest_percent: Some(self.daily_interest_percent),
        }
    }

    /// Amount due on an installment paid on `reference_date`.
    pub fn charge_installment(
        &self,
        principal: Amount,
        due_date: NaiveDate,
        reference_date: NaiveDate,
        discount: Option<Amount>,
    ) -> Result<ChargeBreakdown> {
        let days_late = calculate_days_late(due_date, reference_date);
        calculate_total_with_penalty_and_interest(
            principal,
            days_late,
            &self.charge_options(discount),
        )
    }

    /// Like [`crate::is_in_adjustment_window`], with this policy's window width.
    pub fn is_in_adjustment_window(
        &self,
        contract_start_date: NaiveDate,
        reference_date: NaiveDate,
    ) -> Result<bool> {
        is_within_window(
            contract_start_date,
            reference_date,
            self.adjustment_window_days,
        )
    }
}
