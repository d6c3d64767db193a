//! Chore records and their completion lifecycle.
//!
//! # Responsibility
//! - Model a task assigned to one roommate with a due date and a
//!   priority.
//! - Keep the completion flag and completion date in lockstep.
//!
//! # Invariants
//! - `completed == true` exactly when `completed_date` is present.
//! - Completion is reversible; reopening clears the date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::roommate::RoommateId;
use crate::model::ValidationError;

/// Stable identifier of a chore record.
pub type ChoreId = Uuid;

/// Urgency of a chore, also reused for reminders derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A task assigned to a single roommate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub title: String,
    pub description: String,
    pub assigned_to: RoommateId,
    pub due_date: NaiveDate,
    pub completed: bool,
    /// Day the chore was checked off, present exactly when
    /// `completed`.
    pub completed_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl Chore {
    /// Creates an open chore with a fresh id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assigned_to: RoommateId,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Self {
        Chore {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            assigned_to,
            due_date,
            completed: false,
            completed_date: None,
            priority,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "chore",
                field: "title",
            });
        }
        if self.completed != self.completed_date.is_some() {
            return Err(ValidationError::CompletionMismatch);
        }
        Ok(())
    }

    /// Checks the chore off as done on the given day.
    pub fn complete_on(&mut self, date: NaiveDate) {
        self.completed = true;
        self.completed_date = Some(date);
    }

    /// Reopens a completed chore, clearing the completion date.
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_date = None;
    }
}
