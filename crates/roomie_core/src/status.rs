//! Date-based status checks for chores and bills.
//!
//! # Responsibility
//! - Classify records against an explicit `today`; nothing in this
//!   module reads a clock.
//!
//! # Invariants
//! - Completed chores and settled bills are never overdue.
//! - A chore due today is not yet overdue; overdue starts the day
//!   after the due date.
//! - A bill turns overdue once `today - date` reaches the grace
//!   period.

use chrono::{Duration, NaiveDate};

use crate::model::bill::Bill;
use crate::model::chore::Chore;

/// Days an unsettled bill may age before counting as overdue.
pub const BILL_GRACE_DAYS: i64 = 1;

/// Whether the chore's due date has passed without completion.
pub fn is_chore_overdue(chore: &Chore, today: NaiveDate) -> bool {
    !chore.completed && chore.due_date < today
}

/// Whether the chore is open and due exactly one day from `today`.
pub fn is_chore_due_tomorrow(chore: &Chore, today: NaiveDate) -> bool {
    !chore.completed && chore.due_date == today + Duration::days(1)
}

/// Whether the bill is unsettled and at least `grace_days` old.
///
/// Future-dated bills have a negative age and are never overdue.
pub fn is_bill_overdue(bill: &Bill, today: NaiveDate, grace_days: i64) -> bool {
    !bill.settled && (today - bill.date).num_days() >= grace_days
}
