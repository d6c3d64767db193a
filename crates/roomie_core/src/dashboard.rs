//! Read models for the household overview screen.
//!
//! # Responsibility
//! - Flatten a snapshot into display-ready rows: per-member balances,
//!   the most recent bills, chore progress, and the headline counters.
//!
//! # Invariants
//! - Pure snapshot-in, rows-out; ids are resolved to labels here so
//!   render paths never look anything up.
//! - Row order follows snapshot order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::net_balance;
use crate::model::bill::Bill;
use crate::model::chore::Chore;
use crate::model::roommate::{display_name, RoommateId};
use crate::model::snapshot::HouseholdSnapshot;
use crate::status::is_chore_overdue;

/// How many bills the overview lists, taken from the front of the
/// snapshot in stored order.
pub const RECENT_BILL_LIMIT: usize = 3;

/// One roster member with their resolved net position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberBalance {
    pub roommate_id: RoommateId,
    pub name: String,
    pub color: String,
    pub net: f64,
}

/// One bill row on the overview, payer already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentBill {
    pub title: String,
    pub amount: f64,
    pub paid_by: String,
    pub date: NaiveDate,
    pub settled: bool,
}

/// Chore completion tally for one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoreProgress {
    pub roommate_id: RoommateId,
    pub name: String,
    pub completed: usize,
    pub total: usize,
}

impl ChoreProgress {
    /// Completion as a 0..=100 percentage; an empty tally is 0.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Everything the overview screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub balances: Vec<MemberBalance>,
    pub recent_bills: Vec<RecentBill>,
    pub chores_completed: usize,
    pub chores_total: usize,
    pub progress: Vec<ChoreProgress>,
}

/// Builds the overview rows from one snapshot.
pub fn dashboard(snapshot: &HouseholdSnapshot) -> DashboardView {
    let balances = snapshot
        .roommates
        .iter()
        .map(|r| MemberBalance {
            roommate_id: r.id,
            name: r.name.clone(),
            color: r.color.clone(),
            net: net_balance(&snapshot.bills, r.id),
        })
        .collect();

    let recent_bills = snapshot
        .bills
        .iter()
        .take(RECENT_BILL_LIMIT)
        .map(|b| RecentBill {
            title: b.title.clone(),
            amount: b.amount,
            paid_by: display_name(&snapshot.roommates, b.paid_by).to_string(),
            date: b.date,
            settled: b.settled,
        })
        .collect();

    let progress = snapshot
        .roommates
        .iter()
        .map(|r| {
            let mine: Vec<&Chore> = snapshot
                .chores
                .iter()
                .filter(|c| c.assigned_to == r.id)
                .collect();
            ChoreProgress {
                roommate_id: r.id,
                name: r.name.clone(),
                completed: mine.iter().filter(|c| c.completed).count(),
                total: mine.len(),
            }
        })
        .collect();

    DashboardView {
        balances,
        recent_bills,
        chores_completed: completed_chore_count(&snapshot.chores),
        chores_total: snapshot.chores.len(),
        progress,
    }
}

/// Headline counters for the overview's stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub total_bills: usize,
    pub completed_chores: usize,
    pub pending_chores: usize,
    pub overdue_chores: usize,
}

/// Tallies the stat tiles against an explicit day.
pub fn quick_stats(bills: &[Bill], chores: &[Chore], today: NaiveDate) -> QuickStats {
    QuickStats {
        total_bills: bills.len(),
        completed_chores: completed_chore_count(chores),
        pending_chores: pending_chore_count(chores),
        overdue_chores: overdue_chore_count(chores, today),
    }
}

pub fn completed_chore_count(chores: &[Chore]) -> usize {
    chores.iter().filter(|c| c.completed).count()
}

pub fn pending_chore_count(chores: &[Chore]) -> usize {
    chores.iter().filter(|c| !c.completed).count()
}

pub fn overdue_chore_count(chores: &[Chore], today: NaiveDate) -> usize {
    chores
        .iter()
        .filter(|c| is_chore_overdue(c, today))
        .count()
}
