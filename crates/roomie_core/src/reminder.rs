//! Reminder derivation from the bill and chore snapshots.
//!
//! # Responsibility
//! - Turn a snapshot plus an explicit `today` into the list of notices
//!   worth surfacing, without touching any store.
//!
//! # Invariants
//! - Output order is fixed: aged bills first, then chores due
//!   tomorrow, then overdue chores, each pass in input order.
//! - Reminders are ephemeral; nothing here is persisted or
//!   deduplicated across calls.
//! - A participant id with no roster match still emits, named with the
//!   roster fallback label.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::bill::Bill;
use crate::model::chore::{Chore, Priority};
use crate::model::roommate::{display_name, Roommate, RoommateId};
use crate::status::{is_bill_overdue, is_chore_due_tomorrow, is_chore_overdue, BILL_GRACE_DAYS};

/// What kind of obligation a reminder points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Bill,
    Chore,
}

/// A derived notice about one roommate's obligation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub message: String,
    pub roommate_id: RoommateId,
    pub priority: Priority,
}

/// Derives the notices for `today` from the given snapshot.
///
/// Three passes, in order:
/// 1. Every unsettled bill past its grace period emits one high
///    priority reminder per participant other than the payer, naming
///    their per-head share.
/// 2. Every open chore due exactly tomorrow emits a reminder at the
///    chore's own priority.
/// 3. Every open chore past its due date emits a high priority
///    reminder, whatever the chore's own priority.
pub fn derive_reminders(
    roommates: &[Roommate],
    bills: &[Bill],
    chores: &[Chore],
    today: NaiveDate,
) -> Vec<Reminder> {
    let mut reminders = Vec::new();

    for bill in bills {
        if !is_bill_overdue(bill, today, BILL_GRACE_DAYS) {
            continue;
        }
        for &participant in &bill.split_between {
            if participant == bill.paid_by {
                continue;
            }
            reminders.push(Reminder {
                kind: ReminderKind::Bill,
                message: format!(
                    "{} hasn't paid their share of \"{}\" (${:.2})",
                    display_name(roommates, participant),
                    bill.title,
                    bill.share(),
                ),
                roommate_id: participant,
                priority: Priority::High,
            });
        }
    }

    for chore in chores {
        if !is_chore_due_tomorrow(chore, today) {
            continue;
        }
        reminders.push(Reminder {
            kind: ReminderKind::Chore,
            message: format!(
                "{} has \"{}\" due tomorrow",
                display_name(roommates, chore.assigned_to),
                chore.title,
            ),
            roommate_id: chore.assigned_to,
            priority: chore.priority,
        });
    }

    for chore in chores {
        if !is_chore_overdue(chore, today) {
            continue;
        }
        reminders.push(Reminder {
            kind: ReminderKind::Chore,
            message: format!(
                "{} has overdue chore: \"{}\"",
                display_name(roommates, chore.assigned_to),
                chore.title,
            ),
            roommate_id: chore.assigned_to,
            priority: Priority::High,
        });
    }

    reminders
}
