//! In-memory store backing for tests, demos and offline use.
//!
//! # Responsibility
//! - Implement [`HouseholdStore`] over plain vectors behind one lock.
//!
//! # Invariants
//! - List order is insertion order, except announcements which come
//!   newest first like the SQLite backing.
//! - `snapshot` reads every collection under one guard; the result
//!   is a single instant of state.
//! - A poisoned lock is recovered, not propagated; state stays usable.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use crate::model::announcement::{Announcement, AnnouncementId};
use crate::model::bill::{Bill, BillId};
use crate::model::chore::{Chore, ChoreId};
use crate::model::group::{Group, GroupId};
use crate::model::roommate::{Roommate, RoommateId};
use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::model::snapshot::HouseholdSnapshot;
use crate::store::{Account, CascadeReport, HouseholdStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct State {
    roommates: Vec<Roommate>,
    groups: Vec<Group>,
    bills: Vec<Bill>,
    chores: Vec<Chore>,
    shopping_items: Vec<ShoppingItem>,
    announcements: Vec<Announcement>,
    accounts: Vec<Account>,
}

/// Vector-backed [`HouseholdStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HouseholdStore for MemoryStore {
    fn list_roommates(&self) -> StoreResult<Vec<Roommate>> {
        Ok(self.state().roommates.clone())
    }

    fn get_roommate(&self, id: RoommateId) -> StoreResult<Option<Roommate>> {
        Ok(self.state().roommates.iter().find(|r| r.id == id).cloned())
    }

    fn insert_roommate(&self, roommate: &Roommate) -> StoreResult<RoommateId> {
        roommate.validate()?;
        let mut state = self.state();
        if state
            .roommates
            .iter()
            .any(|r| r.email.eq_ignore_ascii_case(&roommate.email))
        {
            return Err(StoreError::DuplicateEmail(roommate.email.clone()));
        }
        state.roommates.push(roommate.clone());
        Ok(roommate.id)
    }

    fn update_roommate(&self, roommate: &Roommate) -> StoreResult<()> {
        roommate.validate()?;
        let mut state = self.state();
        if state
            .roommates
            .iter()
            .any(|r| r.id != roommate.id && r.email.eq_ignore_ascii_case(&roommate.email))
        {
            return Err(StoreError::DuplicateEmail(roommate.email.clone()));
        }
        match state.roommates.iter_mut().find(|r| r.id == roommate.id) {
            Some(slot) => {
                *slot = roommate.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "roommate",
                id: roommate.id,
            }),
        }
    }

    fn remove_roommate(&self, id: RoommateId) -> StoreResult<CascadeReport> {
        let mut state = self.state();
        if !state.roommates.iter().any(|r| r.id == id) {
            return Err(StoreError::NotFound {
                entity: "roommate",
                id,
            });
        }

        let bills_before = state.bills.len();
        state
            .bills
            .retain(|b| b.paid_by != id && !b.is_participant(id));
        let chores_before = state.chores.len();
        state.chores.retain(|c| c.assigned_to != id);
        state.roommates.retain(|r| r.id != id);

        Ok(CascadeReport {
            bills_removed: bills_before - state.bills.len(),
            chores_removed: chores_before - state.chores.len(),
        })
    }

    fn list_groups(&self) -> StoreResult<Vec<Group>> {
        Ok(self.state().groups.clone())
    }

    fn insert_group(&self, group: &Group) -> StoreResult<GroupId> {
        group.validate()?;
        self.state().groups.push(group.clone());
        Ok(group.id)
    }

    fn remove_group(&self, id: GroupId) -> StoreResult<()> {
        let mut state = self.state();
        if !state.groups.iter().any(|g| g.id == id) {
            return Err(StoreError::NotFound { entity: "group", id });
        }
        state.groups.retain(|g| g.id != id);
        for roommate in &mut state.roommates {
            if roommate.group_id == Some(id) {
                roommate.group_id = None;
            }
        }
        for announcement in &mut state.announcements {
            if announcement.group_id == Some(id) {
                announcement.group_id = None;
            }
        }
        Ok(())
    }

    fn list_bills(&self) -> StoreResult<Vec<Bill>> {
        Ok(self.state().bills.clone())
    }

    fn insert_bill(&self, bill: &Bill) -> StoreResult<BillId> {
        bill.validate()?;
        self.state().bills.push(bill.clone());
        Ok(bill.id)
    }

    fn settle_bill(&self, id: BillId) -> StoreResult<()> {
        let mut state = self.state();
        match state.bills.iter_mut().find(|b| b.id == id) {
            Some(bill) => {
                bill.settle();
                Ok(())
            }
            None => Err(StoreError::NotFound { entity: "bill", id }),
        }
    }

    fn list_chores(&self) -> StoreResult<Vec<Chore>> {
        Ok(self.state().chores.clone())
    }

    fn get_chore(&self, id: ChoreId) -> StoreResult<Option<Chore>> {
        Ok(self.state().chores.iter().find(|c| c.id == id).cloned())
    }

    fn insert_chore(&self, chore: &Chore) -> StoreResult<ChoreId> {
        chore.validate()?;
        self.state().chores.push(chore.clone());
        Ok(chore.id)
    }

    fn set_chore_completion(
        &self,
        id: ChoreId,
        completed_on: Option<NaiveDate>,
    ) -> StoreResult<()> {
        let mut state = self.state();
        match state.chores.iter_mut().find(|c| c.id == id) {
            Some(chore) => {
                match completed_on {
                    Some(date) => chore.complete_on(date),
                    None => chore.reopen(),
                }
                Ok(())
            }
            None => Err(StoreError::NotFound { entity: "chore", id }),
        }
    }

    fn list_shopping_items(&self) -> StoreResult<Vec<ShoppingItem>> {
        Ok(self.state().shopping_items.clone())
    }

    fn insert_shopping_item(&self, item: &ShoppingItem) -> StoreResult<ShoppingItemId> {
        item.validate()?;
        self.state().shopping_items.push(item.clone());
        Ok(item.id)
    }

    fn mark_item_purchased(
        &self,
        id: ShoppingItemId,
        by: RoommateId,
        on: NaiveDate,
    ) -> StoreResult<()> {
        let mut state = self.state();
        match state.shopping_items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.mark_purchased(by, on);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "shopping_item",
                id,
            }),
        }
    }

    fn remove_shopping_item(&self, id: ShoppingItemId) -> StoreResult<()> {
        let mut state = self.state();
        let before = state.shopping_items.len();
        state.shopping_items.retain(|i| i.id != id);
        if state.shopping_items.len() == before {
            return Err(StoreError::NotFound {
                entity: "shopping_item",
                id,
            });
        }
        Ok(())
    }

    fn list_announcements(&self) -> StoreResult<Vec<Announcement>> {
        let mut announcements = self.state().announcements.clone();
        // Stable sort keeps insertion order within one timestamp.
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(announcements)
    }

    fn get_announcement(&self, id: AnnouncementId) -> StoreResult<Option<Announcement>> {
        Ok(self
            .state()
            .announcements
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    fn insert_announcement(&self, announcement: &Announcement) -> StoreResult<AnnouncementId> {
        announcement.validate()?;
        self.state().announcements.push(announcement.clone());
        Ok(announcement.id)
    }

    fn update_announcement(&self, announcement: &Announcement) -> StoreResult<()> {
        announcement.validate()?;
        let mut state = self.state();
        match state
            .announcements
            .iter_mut()
            .find(|a| a.id == announcement.id)
        {
            Some(slot) => {
                *slot = announcement.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "announcement",
                id: announcement.id,
            }),
        }
    }

    fn remove_announcement(&self, id: AnnouncementId) -> StoreResult<()> {
        let mut state = self.state();
        let before = state.announcements.len();
        state.announcements.retain(|a| a.id != id);
        if state.announcements.len() == before {
            return Err(StoreError::NotFound {
                entity: "announcement",
                id,
            });
        }
        Ok(())
    }

    fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .state()
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn register_account(&self, account: &Account) -> StoreResult<()> {
        let mut state = self.state();
        if state
            .accounts
            .iter()
            .any(|a| a.user_id != account.user_id && a.email.eq_ignore_ascii_case(&account.email))
        {
            return Err(StoreError::DuplicateEmail(account.email.clone()));
        }
        match state
            .accounts
            .iter_mut()
            .find(|a| a.user_id == account.user_id)
        {
            Some(slot) => *slot = account.clone(),
            None => state.accounts.push(account.clone()),
        }
        Ok(())
    }

    fn snapshot(&self) -> StoreResult<HouseholdSnapshot> {
        // One guard across all clones; a writer can never land between
        // collections of the same snapshot.
        let state = self.state();
        let mut announcements = state.announcements.clone();
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(HouseholdSnapshot {
            roommates: state.roommates.clone(),
            groups: state.groups.clone(),
            bills: state.bills.clone(),
            chores: state.chores.clone(),
            shopping_items: state.shopping_items.clone(),
            announcements,
        })
    }
}
