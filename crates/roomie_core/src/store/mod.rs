//! Household store gateway contracts and implementations.
//!
//! # Responsibility
//! - Define the one interface the services use to read and mutate
//!   household state, plus the in-memory and SQLite backings.
//! - Own account identity: invite flows ask here whether an email
//!   already belongs to a registered account.
//!
//! # Invariants
//! - Write paths validate records before touching storage.
//! - Removing a roommate cascades to their bills and chores but never
//!   to shopping items.
//! - Removing a group detaches its members and announcements instead
//!   of deleting them.
//! - Stores persist caller-supplied ids and timestamps verbatim; no
//!   store reads a clock.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::DbError;
use crate::model::announcement::{Announcement, AnnouncementId};
use crate::model::bill::{Bill, BillId};
use crate::model::chore::{Chore, ChoreId};
use crate::model::group::{Group, GroupId};
use crate::model::roommate::{Roommate, RoommateId, UserId};
use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::model::snapshot::HouseholdSnapshot;
use crate::model::ValidationError;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by any store backing.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { entity: &'static str, id: Uuid },
    /// The email already belongs to a roster member.
    DuplicateEmail(String),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::DuplicateEmail(email) => {
                write!(f, "a roommate with email {email} already exists")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::DuplicateEmail(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// An authenticated identity known to the backend, independent of the
/// roster record it may be linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: UserId,
    pub email: String,
}

/// What a roommate removal swept away alongside the roster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub bills_removed: usize,
    pub chores_removed: usize,
}

/// Gateway to household state. One implementation per backing; the
/// services only ever see this trait.
pub trait HouseholdStore {
    fn list_roommates(&self) -> StoreResult<Vec<Roommate>>;
    fn get_roommate(&self, id: RoommateId) -> StoreResult<Option<Roommate>>;
    fn insert_roommate(&self, roommate: &Roommate) -> StoreResult<RoommateId>;
    fn update_roommate(&self, roommate: &Roommate) -> StoreResult<()>;
    /// Removes the roommate plus every bill they paid or shared and
    /// every chore assigned to them. Shopping items they added stay.
    fn remove_roommate(&self, id: RoommateId) -> StoreResult<CascadeReport>;

    fn list_groups(&self) -> StoreResult<Vec<Group>>;
    fn insert_group(&self, group: &Group) -> StoreResult<GroupId>;
    /// Deletes the group; members and announcements scoped to it fall
    /// back to the household-wide scope.
    fn remove_group(&self, id: GroupId) -> StoreResult<()>;

    fn list_bills(&self) -> StoreResult<Vec<Bill>>;
    fn insert_bill(&self, bill: &Bill) -> StoreResult<BillId>;
    fn settle_bill(&self, id: BillId) -> StoreResult<()>;

    fn list_chores(&self) -> StoreResult<Vec<Chore>>;
    fn get_chore(&self, id: ChoreId) -> StoreResult<Option<Chore>>;
    fn insert_chore(&self, chore: &Chore) -> StoreResult<ChoreId>;
    /// `Some(date)` checks the chore off on that day; `None` reopens
    /// it.
    fn set_chore_completion(
        &self,
        id: ChoreId,
        completed_on: Option<NaiveDate>,
    ) -> StoreResult<()>;

    fn list_shopping_items(&self) -> StoreResult<Vec<ShoppingItem>>;
    fn insert_shopping_item(&self, item: &ShoppingItem) -> StoreResult<ShoppingItemId>;
    fn mark_item_purchased(
        &self,
        id: ShoppingItemId,
        by: RoommateId,
        on: NaiveDate,
    ) -> StoreResult<()>;
    fn remove_shopping_item(&self, id: ShoppingItemId) -> StoreResult<()>;

    /// All announcements, newest first, expired ones included.
    fn list_announcements(&self) -> StoreResult<Vec<Announcement>>;
    fn get_announcement(&self, id: AnnouncementId) -> StoreResult<Option<Announcement>>;
    fn insert_announcement(&self, announcement: &Announcement) -> StoreResult<AnnouncementId>;
    fn update_announcement(&self, announcement: &Announcement) -> StoreResult<()>;
    fn remove_announcement(&self, id: AnnouncementId) -> StoreResult<()>;

    fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>>;
    fn register_account(&self, account: &Account) -> StoreResult<()>;

    /// One consistent read of every collection.
    fn snapshot(&self) -> StoreResult<HouseholdSnapshot>;
}
