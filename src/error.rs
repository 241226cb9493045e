use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BillingError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    #[error("Invalid argument: {field} {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Payment of {amount_paid} exceeds the total owed of {total_owed}")]
    PaymentExceedsDebt {
        amount_paid: Decimal,
        total_owed: Decimal,
    },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

impl BillingError {
    pub(crate) fn negative(field: &'static str, value: Decimal) -> Self {
        BillingError::InvalidArgument {
            field,
            reason: format!("must not be negative (got {value})"),
        }
    }
}
