//! Roommate records and roster lookup helpers.
//!
//! # Responsibility
//! - Model a household member, whether a pending invite or a linked
//!   account holder.
//! - Resolve ids to display names and colors with total fallbacks so
//!   render paths never deal with misses.
//!
//! # Invariants
//! - `status == Registered` implies `user_id` is present.
//! - `status == Invited` implies `user_id` is absent.
//! - Lookup helpers never panic on unknown ids; they fall back to
//!   fixed labels.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::group::GroupId;
use crate::model::ValidationError;

/// Stable identifier of a roommate record.
pub type RoommateId = Uuid;

/// Identifier of an authenticated account, distinct from the roommate
/// record it may be linked to.
pub type UserId = Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Colors cycled through when inviting; the pick is roster size modulo
/// palette length.
pub const COLOR_PALETTE: [&str; 6] = ["blue", "green", "purple", "red", "yellow", "pink"];

/// Color reported for ids that resolve to no roommate.
pub const FALLBACK_COLOR: &str = "gray";

/// Name reported for roommate ids that resolve to no roommate.
pub const UNKNOWN_ROOMMATE_LABEL: &str = "Unknown";

/// Name reported for account ids that resolve to no roommate.
pub const UNKNOWN_USER_LABEL: &str = "Unknown User";

/// Whether a roommate has linked an account yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Invited by email, no account linked yet.
    Invited,
    /// Linked to an authenticated account.
    Registered,
}

/// A member of the household roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: RoommateId,
    pub name: String,
    pub email: String,
    /// Display color tag, one of [`COLOR_PALETTE`] for invited members.
    pub color: String,
    /// Linked account, present once the member registered.
    pub user_id: Option<UserId>,
    pub status: Option<MemberStatus>,
    /// Account that sent the invitation, if any.
    pub invited_by: Option<UserId>,
    /// Group scope; `None` means visible to the whole household.
    pub group_id: Option<GroupId>,
}

impl Roommate {
    /// Creates a pending invite with a fresh id and no linked account.
    pub fn invited(
        name: impl Into<String>,
        email: impl Into<String>,
        color: impl Into<String>,
        invited_by: Option<UserId>,
        group_id: Option<GroupId>,
    ) -> Self {
        Roommate {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            color: color.into(),
            user_id: None,
            status: Some(MemberStatus::Invited),
            invited_by,
            group_id,
        }
    }

    /// Creates a member already linked to an account.
    pub fn registered(
        name: impl Into<String>,
        email: impl Into<String>,
        color: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Roommate {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            color: color.into(),
            user_id: Some(user_id),
            status: Some(MemberStatus::Registered),
            invited_by: None,
            group_id: None,
        }
    }

    /// Marks the invite as claimed by `user_id`.
    pub fn link_account(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
        self.status = Some(MemberStatus::Registered);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "roommate",
                field: "name",
            });
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if self.color.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "roommate",
                field: "color",
            });
        }
        match self.status {
            Some(MemberStatus::Registered) if self.user_id.is_none() => {
                Err(ValidationError::MembershipMismatch(MemberStatus::Registered))
            }
            Some(MemberStatus::Invited) if self.user_id.is_some() => {
                Err(ValidationError::MembershipMismatch(MemberStatus::Invited))
            }
            _ => Ok(()),
        }
    }
}

/// Picks the invite color for the next member of a roster of the given
/// size.
pub fn palette_color(roster_size: usize) -> &'static str {
    COLOR_PALETTE[roster_size % COLOR_PALETTE.len()]
}

/// Resolves a roommate id to its display name, falling back to
/// [`UNKNOWN_ROOMMATE_LABEL`].
pub fn display_name(roommates: &[Roommate], id: RoommateId) -> &str {
    roommates
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.name.as_str())
        .unwrap_or(UNKNOWN_ROOMMATE_LABEL)
}

/// Resolves an account id to the linked roommate's display name,
/// falling back to [`UNKNOWN_USER_LABEL`].
pub fn display_name_by_user(roommates: &[Roommate], user_id: UserId) -> &str {
    roommates
        .iter()
        .find(|r| r.user_id == Some(user_id))
        .map(|r| r.name.as_str())
        .unwrap_or(UNKNOWN_USER_LABEL)
}

/// Resolves a roommate id to its color tag, falling back to
/// [`FALLBACK_COLOR`].
pub fn color_tag(roommates: &[Roommate], id: RoommateId) -> &str {
    roommates
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.color.as_str())
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Roommate> {
        vec![
            Roommate::registered("Alice", "alice@example.com", "blue", Uuid::new_v4()),
            Roommate::invited("Bob", "bob@example.com", "green", None, None),
        ]
    }

    #[test]
    fn resolves_known_roommate() {
        let roster = roster();
        assert_eq!(display_name(&roster, roster[1].id), "Bob");
        assert_eq!(color_tag(&roster, roster[1].id), "green");
    }

    #[test]
    fn unknown_ids_fall_back_to_labels() {
        let roster = roster();
        let missing = Uuid::new_v4();
        assert_eq!(display_name(&roster, missing), "Unknown");
        assert_eq!(display_name_by_user(&roster, missing), "Unknown User");
        assert_eq!(color_tag(&roster, missing), FALLBACK_COLOR);
    }

    #[test]
    fn resolves_by_linked_account() {
        let roster = roster();
        let user = roster[0].user_id.unwrap();
        assert_eq!(display_name_by_user(&roster, user), "Alice");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), "blue");
        assert_eq!(palette_color(5), "pink");
        assert_eq!(palette_color(6), "blue");
    }

    #[test]
    fn registered_without_account_is_rejected() {
        let mut member = Roommate::registered("Ada", "ada@example.com", "red", Uuid::new_v4());
        member.user_id = None;
        assert_eq!(
            member.validate(),
            Err(ValidationError::MembershipMismatch(MemberStatus::Registered))
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let member = Roommate::invited("Ada", "not-an-email", "red", None, None);
        assert!(matches!(
            member.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }
}
