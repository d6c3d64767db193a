//! Roster and group use-case service.
//!
//! # Responsibility
//! - Drive the invite flow: account lookup, palette color pick, roster
//!   insert, background invitation email.
//! - Apply the removal cascade and group lifecycle through the store.
//!
//! # Invariants
//! - The invitation email goes out only after the roster insert
//!   succeeded, and its failure never removes the new member.
//! - Invite status is decided by account lookup: a known email joins
//!   as registered, an unknown one as invited.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::group::{Group, GroupId};
use crate::model::roommate::{
    display_name_by_user, palette_color, Roommate, RoommateId, UserId, UNKNOWN_USER_LABEL,
};
use crate::notify::{DispatchHandle, Dispatcher, InvitationNotice};
use crate::store::{Account, CascadeReport, HouseholdStore, StoreError};

/// Inviter label used when the sender cannot be resolved to a name.
const FALLBACK_INVITER: &str = "Your roommate";

/// Service error for roster and group use-cases.
#[derive(Debug)]
pub enum HouseholdServiceError {
    /// The email already belongs to a roster member.
    AlreadyRoommate(String),
    RoommateNotFound(RoommateId),
    GroupNotFound(GroupId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for HouseholdServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRoommate(email) => {
                write!(f, "this person is already a roommate: {email}")
            }
            Self::RoommateNotFound(id) => write!(f, "roommate not found: {id}"),
            Self::GroupNotFound(id) => write!(f, "group not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HouseholdServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for HouseholdServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateEmail(email) => Self::AlreadyRoommate(email),
            StoreError::NotFound {
                entity: "roommate",
                id,
            } => Self::RoommateNotFound(id),
            StoreError::NotFound { entity: "group", id } => Self::GroupNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Request model for inviting a new member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoommateInvite {
    pub name: String,
    pub email: String,
    /// Account sending the invite, if the caller is signed in.
    pub invited_by: Option<UserId>,
    pub group_id: Option<GroupId>,
}

/// Result of an invite: the stored member plus the email delivery
/// handle.
#[derive(Debug)]
pub struct InviteOutcome {
    pub roommate: Roommate,
    pub delivery: DispatchHandle,
}

/// Use-case service for the roster and its groups.
pub struct HouseholdService<'s, S: HouseholdStore> {
    store: &'s S,
    dispatcher: Dispatcher,
}

impl<'s, S: HouseholdStore> HouseholdService<'s, S> {
    pub fn new(store: &'s S, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Adds a member to the roster and emails them in the background.
    ///
    /// # Contract
    /// - Color is picked from the palette by current roster size.
    /// - An email with a linked account joins as `registered`; any
    ///   other joins as `invited`.
    /// - A duplicate email fails with [`HouseholdServiceError::AlreadyRoommate`]
    ///   before anything is stored.
    /// - The returned delivery handle reports the email outcome; a
    ///   failed delivery leaves the member in place.
    pub fn invite_roommate(
        &self,
        request: &RoommateInvite,
    ) -> Result<InviteOutcome, HouseholdServiceError> {
        let roster = self.store.list_roommates()?;
        let account = self.store.find_account_by_email(&request.email)?;
        let color = palette_color(roster.len());

        let roommate = match &account {
            Some(account) => {
                let mut member =
                    Roommate::registered(&request.name, &request.email, color, account.user_id);
                member.invited_by = request.invited_by;
                member.group_id = request.group_id;
                member
            }
            None => Roommate::invited(
                &request.name,
                &request.email,
                color,
                request.invited_by,
                request.group_id,
            ),
        };

        self.store.insert_roommate(&roommate)?;

        let invited_by = request
            .invited_by
            .map(|user_id| resolve_inviter(&roster, user_id))
            .unwrap_or_else(|| FALLBACK_INVITER.to_string());
        let delivery = self.dispatcher.dispatch_invitation(InvitationNotice {
            invited_by,
            roommate_name: roommate.name.clone(),
            roommate_email: roommate.email.clone(),
            is_new_user: account.is_none(),
        });

        Ok(InviteOutcome { roommate, delivery })
    }

    /// Registers an account and claims a matching pending invite.
    ///
    /// Returns the linked roster record when an invite with that email
    /// existed.
    pub fn register_account(
        &self,
        account: &Account,
    ) -> Result<Option<Roommate>, HouseholdServiceError> {
        self.store.register_account(account)?;

        let roster = self.store.list_roommates()?;
        let invite = roster
            .into_iter()
            .find(|r| r.user_id.is_none() && r.email.eq_ignore_ascii_case(&account.email));
        match invite {
            Some(mut roommate) => {
                roommate.link_account(account.user_id);
                self.store.update_roommate(&roommate)?;
                Ok(Some(roommate))
            }
            None => Ok(None),
        }
    }

    /// Removes a member together with their bills and chores. Shopping
    /// items they added stay on the list.
    pub fn remove_roommate(
        &self,
        id: RoommateId,
    ) -> Result<CascadeReport, HouseholdServiceError> {
        Ok(self.store.remove_roommate(id)?)
    }

    pub fn roster(&self) -> Result<Vec<Roommate>, HouseholdServiceError> {
        Ok(self.store.list_roommates()?)
    }

    pub fn create_group(&self, group: &Group) -> Result<GroupId, HouseholdServiceError> {
        Ok(self.store.insert_group(group)?)
    }

    /// Deletes a group; its members fall back to the household-wide
    /// scope.
    pub fn delete_group(&self, id: GroupId) -> Result<(), HouseholdServiceError> {
        Ok(self.store.remove_group(id)?)
    }

    pub fn groups(&self) -> Result<Vec<Group>, HouseholdServiceError> {
        Ok(self.store.list_groups()?)
    }
}

fn resolve_inviter(roster: &[Roommate], user_id: UserId) -> String {
    let name = display_name_by_user(roster, user_id);
    if name == UNKNOWN_USER_LABEL {
        FALLBACK_INVITER.to_string()
    } else {
        name.to_string()
    }
}
