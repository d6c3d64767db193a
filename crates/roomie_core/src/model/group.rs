//! Group records scoping roster members and announcements.
//!
//! # Responsibility
//! - Model a named sub-group of the household.
//! - Resolve an optional group scope to a display label with total
//!   fallbacks.
//!
//! # Invariants
//! - `None` as a scope always means the whole household, never a
//!   missing group.
//! - Deleting a group detaches its members instead of deleting them;
//!   that rule lives in the store gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::roommate::UserId;
use crate::model::ValidationError;

/// Stable identifier of a group record.
pub type GroupId = Uuid;

/// Label for the absent scope, meaning the whole household.
pub const ALL_ROOMMATES_LABEL: &str = "All Roommates";

/// Label for a scope whose group record no longer exists.
pub const UNKNOWN_GROUP_LABEL: &str = "Unknown Group";

/// A named sub-group of the household roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn new(name: impl Into<String>, created_by: UserId, now: DateTime<Utc>) -> Self {
        Group {
            id: Uuid::new_v4(),
            name: name.into(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "group",
                field: "name",
            });
        }
        Ok(())
    }
}

/// Resolves an optional group scope to a display label.
///
/// `None` is the household-wide scope and maps to
/// [`ALL_ROOMMATES_LABEL`]; an id with no matching record maps to
/// [`UNKNOWN_GROUP_LABEL`].
pub fn group_display_name(groups: &[Group], scope: Option<GroupId>) -> &str {
    match scope {
        None => ALL_ROOMMATES_LABEL,
        Some(id) => groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
            .unwrap_or(UNKNOWN_GROUP_LABEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_labels() {
        let group = Group::new("Upstairs", Uuid::new_v4(), Utc::now());
        let groups = vec![group.clone()];
        assert_eq!(group_display_name(&groups, None), "All Roommates");
        assert_eq!(group_display_name(&groups, Some(group.id)), "Upstairs");
        assert_eq!(
            group_display_name(&groups, Some(Uuid::new_v4())),
            "Unknown Group"
        );
    }
}
