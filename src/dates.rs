use chrono::{Local, NaiveDate};

/// Whole days between `due_date` and `reference_date`, never negative.
///
/// An installment that is due today or in the future is 0 days late.
pub fn calculate_days_late(due_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (reference_date - due_date).num_days().max(0)
}

/// [`calculate_days_late`] against the local calendar date.
pub fn days_late_as_of_today(due_date: NaiveDate) -> i64 {
    calculate_days_late(due_date, today())
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
