//! Announcement board use-case service.
//!
//! # Responsibility
//! - Post, edit and remove announcements through the store.
//! - Fan posted announcements out to the scoped recipients in the
//!   background.
//!
//! # Invariants
//! - The email fan-out starts only after the insert committed; its
//!   failure never removes the announcement.
//! - Active reads filter expired entries against an explicit `now`
//!   and never delete them.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

use crate::model::announcement::{scoped_recipients, Announcement, AnnouncementId};
use crate::model::group::{group_display_name, GroupId};
use crate::model::roommate::{display_name_by_user, Roommate, UserId, UNKNOWN_USER_LABEL};
use crate::notify::{AnnouncementNotice, DispatchHandle, Dispatcher, Recipient};
use crate::store::{HouseholdStore, StoreError};

/// Author label used when the poster cannot be resolved to a name.
const FALLBACK_AUTHOR: &str = "A roommate";

/// Service error for announcement use-cases.
#[derive(Debug)]
pub enum AnnouncementServiceError {
    AnnouncementNotFound(AnnouncementId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for AnnouncementServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnnouncementNotFound(id) => write!(f, "announcement not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AnnouncementServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AnnouncementServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound {
                entity: "announcement",
                id,
            } => Self::AnnouncementNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Request model for posting to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub created_by: UserId,
    /// `None` addresses the whole household.
    pub group_id: Option<GroupId>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Changes applied to an existing announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementEdit {
    pub title: String,
    pub content: String,
    pub group_id: Option<GroupId>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of a post: the stored announcement plus the fan-out handle.
pub struct PostOutcome {
    pub announcement: Announcement,
    pub delivery: DispatchHandle,
}

/// Use-case service for the announcement board.
pub struct AnnouncementService<'s, S: HouseholdStore> {
    store: &'s S,
    dispatcher: Dispatcher,
}

impl<'s, S: HouseholdStore> AnnouncementService<'s, S> {
    pub fn new(store: &'s S, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Posts an announcement and emails the scoped members in the
    /// background.
    ///
    /// # Contract
    /// - A `group_id` scope addresses exactly that group; `None`
    ///   addresses the whole roster.
    /// - With no recipients in scope the delivery resolves to skipped
    ///   without sending.
    /// - The returned delivery handle reports the fan-out outcome; a
    ///   failure leaves the announcement posted.
    pub fn post_announcement(
        &self,
        request: &NewAnnouncement,
        now: DateTime<Utc>,
    ) -> Result<PostOutcome, AnnouncementServiceError> {
        let announcement = Announcement::new(
            &request.title,
            &request.content,
            request.created_by,
            request.group_id,
            request.expires_at,
            now,
        );
        self.store.insert_announcement(&announcement)?;

        let roster = self.store.list_roommates()?;
        let groups = self.store.list_groups()?;
        let recipients = scoped_recipients(&roster, request.group_id)
            .into_iter()
            .map(|r| Recipient {
                name: r.name.clone(),
                email: r.email.clone(),
            })
            .collect();

        let delivery = self.dispatcher.dispatch_announcement(AnnouncementNotice {
            title: announcement.title.clone(),
            content: announcement.content.clone(),
            group_name: group_display_name(&groups, request.group_id).to_string(),
            created_by: resolve_author(&roster, request.created_by),
            recipients,
        });

        Ok(PostOutcome {
            announcement,
            delivery,
        })
    }

    /// Applies an edit and stamps `updated_at = now`.
    pub fn edit_announcement(
        &self,
        id: AnnouncementId,
        edit: &AnnouncementEdit,
        now: DateTime<Utc>,
    ) -> Result<Announcement, AnnouncementServiceError> {
        let mut announcement = self
            .store
            .get_announcement(id)?
            .ok_or(AnnouncementServiceError::AnnouncementNotFound(id))?;

        announcement.title = edit.title.clone();
        announcement.content = edit.content.clone();
        announcement.group_id = edit.group_id;
        announcement.expires_at = edit.expires_at;
        announcement.updated_at = now;

        self.store.update_announcement(&announcement)?;
        Ok(announcement)
    }

    pub fn remove_announcement(&self, id: AnnouncementId) -> Result<(), AnnouncementServiceError> {
        Ok(self.store.remove_announcement(id)?)
    }

    /// Board entries still visible at `now`, newest first. Expired
    /// entries stay stored.
    pub fn active_announcements(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Announcement>, AnnouncementServiceError> {
        let announcements = self.store.list_announcements()?;
        Ok(announcements
            .into_iter()
            .filter(|a| a.is_active(now))
            .collect())
    }
}

fn resolve_author(roster: &[Roommate], user_id: UserId) -> String {
    let name = display_name_by_user(roster, user_id);
    if name == UNKNOWN_USER_LABEL {
        FALLBACK_AUTHOR.to_string()
    } else {
        name.to_string()
    }
}
