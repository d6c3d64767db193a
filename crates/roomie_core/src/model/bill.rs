//! Shared bill records.
//!
//! # Responsibility
//! - Model an expense paid by one roommate and split across several.
//! - Keep the split well-formed so per-head shares divide cleanly.
//!
//! # Invariants
//! - `amount` is finite and non-negative.
//! - `split_between` is non-empty and free of duplicates.
//! - Settling is one-way here; reopening a bill is not modeled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::roommate::RoommateId;
use crate::model::ValidationError;

/// Stable identifier of a bill record.
pub type BillId = Uuid;

/// Category applied when none is given.
pub const DEFAULT_CATEGORY: &str = "Other";

/// An expense paid by one roommate on behalf of several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Who fronted the money.
    pub paid_by: RoommateId,
    /// Who owes a share; may or may not include the payer.
    pub split_between: Vec<RoommateId>,
    /// Day the expense happened, not when it was recorded.
    pub date: NaiveDate,
    pub settled: bool,
}

impl Bill {
    /// Creates an unsettled bill with a fresh id. A blank category
    /// falls back to [`DEFAULT_CATEGORY`].
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        paid_by: RoommateId,
        split_between: Vec<RoommateId>,
        date: NaiveDate,
    ) -> Self {
        let category = category.into();
        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        };
        Bill {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            paid_by,
            split_between,
            date,
            settled: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "bill",
                field: "title",
            });
        }
        if !self.amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        if self.split_between.is_empty() {
            return Err(ValidationError::EmptySplit);
        }
        for (i, id) in self.split_between.iter().enumerate() {
            if self.split_between[..i].contains(id) {
                return Err(ValidationError::DuplicateParticipant(*id));
            }
        }
        Ok(())
    }

    /// Per-head share of the amount.
    ///
    /// The divisor is the split size only; whether the payer is listed
    /// in the split does not change it.
    pub fn share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }

    /// Whether the roommate owes a share of this bill.
    pub fn is_participant(&self, roommate: RoommateId) -> bool {
        self.split_between.contains(&roommate)
    }

    pub fn settle(&mut self) {
        self.settled = true;
    }
}
