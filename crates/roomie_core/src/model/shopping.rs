//! Shared shopping list items.
//!
//! # Responsibility
//! - Model an item anyone can add and anyone can buy.
//! - Keep the purchase flag and purchase details in lockstep.
//!
//! # Invariants
//! - `purchased == true` exactly when both `purchased_by` and
//!   `purchased_date` are present.
//! - Items outlive the roommate who added them; only the resolver
//!   label degrades.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::roommate::RoommateId;
use crate::model::ValidationError;

/// Stable identifier of a shopping list item.
pub type ShoppingItemId = Uuid;

/// One entry on the shared shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub item: String,
    pub added_by: RoommateId,
    pub date_added: NaiveDate,
    pub purchased: bool,
    pub purchased_by: Option<RoommateId>,
    pub purchased_date: Option<NaiveDate>,
}

impl ShoppingItem {
    /// Creates a pending item with a fresh id.
    pub fn new(item: impl Into<String>, added_by: RoommateId, date_added: NaiveDate) -> Self {
        ShoppingItem {
            id: Uuid::new_v4(),
            item: item.into(),
            added_by,
            date_added,
            purchased: false,
            purchased_by: None,
            purchased_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "shopping_item",
                field: "item",
            });
        }
        if self.purchased != (self.purchased_by.is_some() && self.purchased_date.is_some()) {
            return Err(ValidationError::PurchaseMismatch);
        }
        Ok(())
    }

    /// Records who bought the item and when.
    pub fn mark_purchased(&mut self, by: RoommateId, on: NaiveDate) {
        self.purchased = true;
        self.purchased_by = Some(by);
        self.purchased_date = Some(on);
    }

    pub fn is_pending(&self) -> bool {
        !self.purchased
    }
}

/// Items still waiting to be bought, in list order.
pub fn pending_items(items: &[ShoppingItem]) -> Vec<&ShoppingItem> {
    items.iter().filter(|i| i.is_pending()).collect()
}

/// Items already bought, in list order.
pub fn purchased_items(items: &[ShoppingItem]) -> Vec<&ShoppingItem> {
    items.iter().filter(|i| i.purchased).collect()
}
