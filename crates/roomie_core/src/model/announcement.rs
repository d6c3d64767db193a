//! Announcement records with soft expiry.
//!
//! # Responsibility
//! - Model a pinned message, optionally scoped to a group and
//!   optionally expiring.
//! - Decide visibility from an explicit clock instead of deleting
//!   expired rows.
//!
//! # Invariants
//! - Expired announcements stay stored; only read paths filter them.
//! - A `None` group scope addresses the whole household.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::group::GroupId;
use crate::model::roommate::{Roommate, UserId};
use crate::model::ValidationError;

/// Stable identifier of an announcement record.
pub type AnnouncementId = Uuid;

/// A message posted to the household board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub content: String,
    pub created_by: UserId,
    /// Group scope; `None` addresses the whole household.
    pub group_id: Option<GroupId>,
    /// Past this instant the announcement disappears from read paths.
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: UserId,
        group_id: Option<GroupId>,
        expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        Announcement {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_by,
            group_id,
            expires_at,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "announcement",
                field: "title",
            });
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "announcement",
                field: "content",
            });
        }
        Ok(())
    }

    /// Whether the announcement is still visible at `now`. No expiry
    /// means always visible.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => true,
            Some(expires_at) => expires_at > now,
        }
    }
}

/// Announcements still visible at `now`, preserving input order.
pub fn active_announcements(
    announcements: &[Announcement],
    now: DateTime<Utc>,
) -> Vec<&Announcement> {
    announcements.iter().filter(|a| a.is_active(now)).collect()
}

/// Roster members addressed by a group scope: the exact group when one
/// is given, the whole roster otherwise.
pub fn scoped_recipients(roommates: &[Roommate], scope: Option<GroupId>) -> Vec<&Roommate> {
    roommates
        .iter()
        .filter(|r| match scope {
            None => true,
            Some(group_id) => r.group_id == Some(group_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn board(now: DateTime<Utc>) -> Vec<Announcement> {
        let author = Uuid::new_v4();
        vec![
            Announcement::new("Rent due", "Transfer by Friday", author, None, None, now),
            Announcement::new(
                "Pizza night",
                "Expired yesterday",
                author,
                None,
                Some(now - Duration::hours(1)),
                now - Duration::days(2),
            ),
            Announcement::new(
                "Cleaning rota",
                "Runs until next week",
                author,
                None,
                Some(now + Duration::days(7)),
                now,
            ),
        ]
    }

    #[test]
    fn expired_entries_are_hidden_not_removed() {
        let now = Utc::now();
        let all = board(now);
        let active = active_announcements(&all, now);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|a| a.title != "Pizza night"));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn no_expiry_means_always_active() {
        let now = Utc::now();
        let all = board(now);
        assert!(all[0].is_active(now + Duration::days(365)));
    }

    #[test]
    fn scope_filters_recipients() {
        let group = Uuid::new_v4();
        let in_group = Roommate::invited("Ann", "ann@example.com", "blue", None, Some(group));
        let outside = Roommate::invited("Ben", "ben@example.com", "green", None, None);
        let roster = vec![in_group, outside];

        let scoped = scoped_recipients(&roster, Some(group));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].name, "Ann");

        let everyone = scoped_recipients(&roster, None);
        assert_eq!(everyone.len(), 2);
    }
}
