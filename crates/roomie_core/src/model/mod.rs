//! Domain model for a shared household.
//!
//! # Responsibility
//! - Define the record shapes exchanged between the store gateway, the
//!   services and the pure balance/reminder calculators.
//! - Enforce shape invariants at construction and decode time so the
//!   calculators can stay total and panic-free.
//!
//! # Invariants
//! - Every record carries a stable UUID assigned at creation.
//! - Validation never mutates; callers decide when to re-check.
//! - Derived values (balances, reminders, dashboards) are built fresh
//!   from these records and are never written back.

pub mod announcement;
pub mod bill;
pub mod chore;
pub mod group;
pub mod roommate;
pub mod shopping;
pub mod snapshot;

pub use announcement::{active_announcements, scoped_recipients, Announcement, AnnouncementId};
pub use bill::{Bill, BillId, DEFAULT_CATEGORY};
pub use chore::{Chore, ChoreId, Priority};
pub use group::{group_display_name, Group, GroupId, ALL_ROOMMATES_LABEL, UNKNOWN_GROUP_LABEL};
pub use roommate::{
    color_tag, display_name, display_name_by_user, palette_color, MemberStatus, Roommate,
    RoommateId, UserId, COLOR_PALETTE, FALLBACK_COLOR, UNKNOWN_ROOMMATE_LABEL, UNKNOWN_USER_LABEL,
};
pub use shopping::{pending_items, purchased_items, ShoppingItem, ShoppingItemId};
pub use snapshot::HouseholdSnapshot;

use std::error::Error;
use std::fmt;

/// Shape violations caught before a record reaches the store or the
/// calculators.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    BlankField {
        entity: &'static str,
        field: &'static str,
    },
    /// The email does not look like `local@domain.tld`.
    InvalidEmail(String),
    /// Membership status and linked account disagree.
    MembershipMismatch(MemberStatus),
    /// Bill amounts must be zero or positive.
    NegativeAmount(f64),
    /// Bill amounts must be finite (no NaN or infinities).
    NonFiniteAmount,
    /// A bill must be split between at least one roommate.
    EmptySplit,
    /// The same roommate appears twice in a bill split.
    DuplicateParticipant(RoommateId),
    /// `completed` and `completed_date` must agree on a chore.
    CompletionMismatch,
    /// Purchase flag and purchase details must agree on a shopping item.
    PurchaseMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankField { entity, field } => {
                write!(f, "{entity}.{field} must not be blank")
            }
            ValidationError::InvalidEmail(email) => {
                write!(f, "invalid email address: {email}")
            }
            ValidationError::MembershipMismatch(status) => match status {
                MemberStatus::Registered => write!(f, "registered roommate has no linked account"),
                MemberStatus::Invited => write!(f, "invited roommate already has a linked account"),
            },
            ValidationError::NegativeAmount(amount) => {
                write!(f, "bill amount must not be negative, got {amount}")
            }
            ValidationError::NonFiniteAmount => write!(f, "bill amount must be finite"),
            ValidationError::EmptySplit => write!(f, "bill must be split between at least one roommate"),
            ValidationError::DuplicateParticipant(id) => {
                write!(f, "roommate {id} listed twice in bill split")
            }
            ValidationError::CompletionMismatch => {
                write!(f, "chore completion flag disagrees with completion date")
            }
            ValidationError::PurchaseMismatch => {
                write!(f, "shopping item purchase flag disagrees with purchase details")
            }
        }
    }
}

impl Error for ValidationError {}
