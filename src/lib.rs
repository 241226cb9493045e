//! `br_lease_billing` is a Rust library for the money side of residential leases in Brazil.
//!
//! It covers the calculations a rental billing workflow needs:
//! - **Multa**: a one-off percentage penalty once an installment is late.
//! - **Juros de mora**: simple daily interest while the installment stays open.
//! - **Partial payments**: a payment is applied to interest, then penalty, then
//!   principal, with the balance rounded to cents at every step.
//! - **Reajuste**: the annual index-based rent adjustment and the window around
//!   the contract anniversary in which it is due.
//!
//! Every function is pure. All amounts are `rust_decimal::Decimal` rounded
//! half-up to cents.
//!
//! ## Usage
//!
//! Add `br_lease_billing` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! br_lease_billing = "0.1.0"
//! chrono = "0.4"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then charge a late installment and apply what the tenant paid:
//!
//! ```rust
//! use br_lease_billing::{
//!     apply_partial_payment, calculate_total_with_penalty_and_interest, ChargeOptions, Debt,
//! };
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let charge =
//!         calculate_total_with_penalty_and_interest(dec!(1000), 30, &ChargeOptions::default())
//!             .expect("valid installment");
//!     println!("Total due: {:.2}", charge.total);
//!
//!     let debt = Debt {
//!         principal: charge.principal,
//!         penalty: charge.penalty,
//!         interest: charge.interest,
//!     };
//!
//!     match apply_partial_payment(&debt, dec!(500)) {
//!         Ok(result) => println!("Remaining balance: {:.2}", result.remaining_balance),
//!         Err(e) => eprintln!("Error applying payment: {}", e),
//!     }
//! }
//! ```

pub mod adjustment;
pub mod charges;
pub mod dates;
pub mod error;
pub mod money;
pub mod payment;
pub mod policy;

pub use adjustment::{
    ADJUSTMENT_WINDOW_DAYS, RentAdjustmentResult, accumulated_index_variation,
    calculate_adjustment, calculate_next_adjustment_date, is_in_adjustment_window,
    is_in_adjustment_window_today,
};
pub use charges::{
    ChargeBreakdown, ChargeOptions, DEFAULT_DAILY_INTEREST_PERCENT, DEFAULT_PENALTY_PERCENT,
    calculate_late_interest, calculate_penalty, calculate_total_with_penalty_and_interest,
};
pub use dates::{calculate_days_late, days_late_as_of_today};
pub use error::{BillingError, Result};
pub use money::{Amount, round2};
pub use payment::{Debt, PaymentAllocationResult, apply_partial_payment};
pub use policy::BillingPolicy;
