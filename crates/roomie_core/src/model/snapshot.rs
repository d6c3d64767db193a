//! Whole-household snapshot handed to the read-side calculators.

use serde::{Deserialize, Serialize};

use crate::model::announcement::Announcement;
use crate::model::bill::Bill;
use crate::model::chore::Chore;
use crate::model::group::Group;
use crate::model::roommate::Roommate;
use crate::model::shopping::ShoppingItem;

/// Every record collection at one moment, in store order.
///
/// Balances, reminders and dashboards are computed from a snapshot so
/// one read sees one consistent state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    pub roommates: Vec<Roommate>,
    pub groups: Vec<Group>,
    pub bills: Vec<Bill>,
    pub chores: Vec<Chore>,
    pub shopping_items: Vec<ShoppingItem>,
    pub announcements: Vec<Announcement>,
}
