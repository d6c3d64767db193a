//! Outbound notification gateway and background dispatcher.
//!
//! # Responsibility
//! - Define the delivery seam the services hand notices to.
//! - Run deliveries on a background thread so mutations return
//!   without waiting on them.
//!
//! # Invariants
//! - Dispatch happens only after the underlying mutation committed; a
//!   failed delivery is reported and never undoes the mutation.
//! - An announcement with no recipients is skipped without spawning.
//! - Dropping a handle detaches the delivery; it still runs.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use serde::Serialize;

pub type GatewayResult<T> = Result<T, NotificationError>;

/// Delivery failure reported by a gateway implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationError {
    pub code: String,
    pub message: String,
}

impl NotificationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Display for NotificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification failed ({}): {}", self.code, self.message)
    }
}

impl Error for NotificationError {}

/// One addressee of an announcement notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

/// Email notice sent to a freshly invited roommate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationNotice {
    /// Display name of whoever sent the invite.
    pub invited_by: String,
    pub roommate_name: String,
    pub roommate_email: String,
    /// Whether the invitee still has to create an account.
    pub is_new_user: bool,
}

/// Email notice fanned out when an announcement is posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementNotice {
    pub title: String,
    pub content: String,
    /// Resolved scope label, household-wide or a group name.
    pub group_name: String,
    /// Display name of the author.
    pub created_by: String,
    pub recipients: Vec<Recipient>,
}

/// Delivery backend. Implementations own transport details; the core
/// only hands them fully resolved notices.
pub trait NotificationGateway: Send + Sync {
    fn send_invitation(&self, notice: &InvitationNotice) -> GatewayResult<()>;
    fn send_announcement(&self, notice: &AnnouncementNotice) -> GatewayResult<()>;
}

/// Terminal state of one dispatched notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStatus {
    Sent,
    /// Nothing to deliver; no thread was spawned.
    Skipped,
    Failed(String),
}

/// Handle on one background delivery. Waiting is optional.
#[derive(Debug)]
pub struct DispatchHandle {
    inner: HandleInner,
}

#[derive(Debug)]
enum HandleInner {
    Ready(DispatchStatus),
    Pending(JoinHandle<DispatchStatus>),
}

impl DispatchHandle {
    fn ready(status: DispatchStatus) -> Self {
        Self {
            inner: HandleInner::Ready(status),
        }
    }

    fn pending(handle: JoinHandle<DispatchStatus>) -> Self {
        Self {
            inner: HandleInner::Pending(handle),
        }
    }

    /// Blocks until the delivery finished and returns its status.
    pub fn wait(self) -> DispatchStatus {
        match self.inner {
            HandleInner::Ready(status) => status,
            HandleInner::Pending(handle) => match handle.join() {
                Ok(status) => status,
                Err(_) => DispatchStatus::Failed("notification task panicked".to_string()),
            },
        }
    }
}

/// Submits notices to the gateway on background threads.
pub struct Dispatcher {
    gateway: Arc<dyn NotificationGateway>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { gateway }
    }

    /// Sends an invitation notice in the background.
    pub fn dispatch_invitation(&self, notice: InvitationNotice) -> DispatchHandle {
        let gateway = Arc::clone(&self.gateway);
        DispatchHandle::pending(thread::spawn(move || {
            info!(
                "event=notify_dispatch module=notify status=start kind=invitation to={}",
                notice.roommate_email
            );
            match gateway.send_invitation(&notice) {
                Ok(()) => {
                    info!("event=notify_dispatch module=notify status=ok kind=invitation");
                    DispatchStatus::Sent
                }
                Err(err) => {
                    warn!(
                        "event=notify_dispatch module=notify status=error kind=invitation error={err}"
                    );
                    DispatchStatus::Failed(err.to_string())
                }
            }
        }))
    }

    /// Sends an announcement notice in the background. An empty
    /// recipient list resolves to [`DispatchStatus::Skipped`]
    /// immediately.
    pub fn dispatch_announcement(&self, notice: AnnouncementNotice) -> DispatchHandle {
        if notice.recipients.is_empty() {
            info!("event=notify_dispatch module=notify status=skip kind=announcement reason=no_recipients");
            return DispatchHandle::ready(DispatchStatus::Skipped);
        }

        let gateway = Arc::clone(&self.gateway);
        DispatchHandle::pending(thread::spawn(move || {
            info!(
                "event=notify_dispatch module=notify status=start kind=announcement recipients={}",
                notice.recipients.len()
            );
            match gateway.send_announcement(&notice) {
                Ok(()) => {
                    info!("event=notify_dispatch module=notify status=ok kind=announcement");
                    DispatchStatus::Sent
                }
                Err(err) => {
                    warn!(
                        "event=notify_dispatch module=notify status=error kind=announcement error={err}"
                    );
                    DispatchStatus::Failed(err.to_string())
                }
            }
        }))
    }
}
