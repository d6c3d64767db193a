//! Bill, chore and shopping list use-case service.
//!
//! # Responsibility
//! - Record expenses, chores and shopping items through the store.
//! - Serve the derived read models: balances, reminders, dashboard.
//!
//! # Invariants
//! - Every read model is computed from one snapshot with an explicit
//!   `today`; this layer never reads a clock.
//! - Toggling a chore on completion stamps `today`; toggling it back
//!   clears the stamp.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::dashboard::{dashboard, quick_stats, DashboardView, QuickStats};
use crate::ledger::{balance_sheet, net_balance, BalanceEntry};
use crate::model::bill::{Bill, BillId};
use crate::model::chore::{Chore, ChoreId, Priority};
use crate::model::roommate::RoommateId;
use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::model::snapshot::HouseholdSnapshot;
use crate::reminder::{derive_reminders, Reminder};
use crate::store::{HouseholdStore, StoreError};

/// Service error for tracking use-cases.
#[derive(Debug)]
pub enum TrackerServiceError {
    BillNotFound(BillId),
    ChoreNotFound(ChoreId),
    ItemNotFound(ShoppingItemId),
    /// Persistence-layer failure.
    Store(StoreError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for TrackerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BillNotFound(id) => write!(f, "bill not found: {id}"),
            Self::ChoreNotFound(id) => write!(f, "chore not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "shopping item not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent tracker state: {details}")
            }
        }
    }
}

impl Error for TrackerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TrackerServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { entity: "bill", id } => Self::BillNotFound(id),
            StoreError::NotFound { entity: "chore", id } => Self::ChoreNotFound(id),
            StoreError::NotFound {
                entity: "shopping_item",
                id,
            } => Self::ItemNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Request model for recording an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub title: String,
    pub amount: f64,
    /// Blank falls back to the default category.
    pub category: String,
    pub paid_by: RoommateId,
    pub split_between: Vec<RoommateId>,
    /// Day the expense happened.
    pub date: NaiveDate,
}

/// Request model for assigning a chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub title: String,
    pub description: String,
    pub assigned_to: RoommateId,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

/// Use-case service for bills, chores and the shopping list.
pub struct TrackerService<'s, S: HouseholdStore> {
    store: &'s S,
}

impl<'s, S: HouseholdStore> TrackerService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Records an unsettled bill split across the given roommates.
    pub fn add_bill(&self, request: &NewBill) -> Result<Bill, TrackerServiceError> {
        let bill = Bill::new(
            &request.title,
            request.amount,
            &request.category,
            request.paid_by,
            request.split_between.clone(),
            request.date,
        );
        self.store.insert_bill(&bill)?;
        Ok(bill)
    }

    /// Freezes a bill's balance contribution at zero.
    pub fn settle_bill(&self, id: BillId) -> Result<(), TrackerServiceError> {
        Ok(self.store.settle_bill(id)?)
    }

    pub fn add_chore(&self, request: &NewChore) -> Result<Chore, TrackerServiceError> {
        let chore = Chore::new(
            &request.title,
            &request.description,
            request.assigned_to,
            request.due_date,
            request.priority,
        );
        self.store.insert_chore(&chore)?;
        Ok(chore)
    }

    /// Flips a chore's completion state.
    ///
    /// # Contract
    /// - An open chore completes with `completed_date = today`.
    /// - A completed chore reopens with the stamp cleared.
    /// - Returns the chore as stored after the flip.
    pub fn toggle_chore(
        &self,
        id: ChoreId,
        today: NaiveDate,
    ) -> Result<Chore, TrackerServiceError> {
        let chore = self
            .store
            .get_chore(id)?
            .ok_or(TrackerServiceError::ChoreNotFound(id))?;

        let completed_on = if chore.completed { None } else { Some(today) };
        self.store.set_chore_completion(id, completed_on)?;

        self.store
            .get_chore(id)?
            .ok_or(TrackerServiceError::InconsistentState(
                "toggled chore not found in read-back",
            ))
    }

    pub fn add_shopping_item(
        &self,
        name: impl Into<String>,
        added_by: RoommateId,
        date_added: NaiveDate,
    ) -> Result<ShoppingItem, TrackerServiceError> {
        let item = ShoppingItem::new(name, added_by, date_added);
        self.store.insert_shopping_item(&item)?;
        Ok(item)
    }

    /// Records who bought an item and when.
    pub fn purchase_item(
        &self,
        id: ShoppingItemId,
        by: RoommateId,
        on: NaiveDate,
    ) -> Result<(), TrackerServiceError> {
        Ok(self.store.mark_item_purchased(id, by, on)?)
    }

    pub fn remove_shopping_item(&self, id: ShoppingItemId) -> Result<(), TrackerServiceError> {
        Ok(self.store.remove_shopping_item(id)?)
    }

    pub fn snapshot(&self) -> Result<HouseholdSnapshot, TrackerServiceError> {
        Ok(self.store.snapshot()?)
    }

    /// Net position of one roommate across all unsettled bills.
    pub fn balance_of(&self, roommate: RoommateId) -> Result<f64, TrackerServiceError> {
        let bills = self.store.list_bills()?;
        Ok(net_balance(&bills, roommate))
    }

    /// Net position per roster member, in roster order.
    pub fn balances(&self) -> Result<Vec<BalanceEntry>, TrackerServiceError> {
        let snapshot = self.store.snapshot()?;
        let roster: Vec<RoommateId> = snapshot.roommates.iter().map(|r| r.id).collect();
        Ok(balance_sheet(&snapshot.bills, &roster))
    }

    /// Notices derived for `today` from the current snapshot.
    pub fn reminders(&self, today: NaiveDate) -> Result<Vec<Reminder>, TrackerServiceError> {
        let snapshot = self.store.snapshot()?;
        Ok(derive_reminders(
            &snapshot.roommates,
            &snapshot.bills,
            &snapshot.chores,
            today,
        ))
    }

    /// Overview rows for the current snapshot.
    pub fn dashboard(&self) -> Result<DashboardView, TrackerServiceError> {
        let snapshot = self.store.snapshot()?;
        Ok(dashboard(&snapshot))
    }

    /// Headline counters for `today` from the current snapshot.
    pub fn quick_stats(&self, today: NaiveDate) -> Result<QuickStats, TrackerServiceError> {
        let snapshot = self.store.snapshot()?;
        Ok(quick_stats(&snapshot.bills, &snapshot.chores, today))
    }
}
