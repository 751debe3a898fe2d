//! Stateless validation predicates
//!
//! Pure checks shared by the model [`Validate`](crate::models::Validate)
//! impls and the reservation opening-hours rule in the service layer.

use chrono::{NaiveTime, Timelike};
use validator::ValidateEmail;

/// Non-empty string check
pub fn is_not_empty(s: &str) -> bool {
    !s.is_empty()
}

/// Syntactic email check
pub fn is_email(s: &str) -> bool {
    s.validate_email()
}

/// Booking slots sit on half-hour boundaries: seconds zero, minutes 0 or 30
pub fn is_multiple_of_half_hour(time: NaiveTime) -> bool {
    time.second() == 0 && time.minute() % 30 == 0
}

/// Strictly positive count
pub fn is_positive(n: i32) -> bool {
    n > 0
}

/// Opening-hours window check: opening time included, closing time excluded
pub fn is_within_opening_hours(time: NaiveTime, open: NaiveTime, close: NaiveTime) -> bool {
    time >= open && time < close
}
