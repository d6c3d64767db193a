//! Core domain logic for Roomie, a shared household tracker.
//! This crate is the single source of truth for business invariants.

pub mod dashboard;
pub mod db;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod notify;
pub mod reminder;
pub mod service;
pub mod status;
pub mod store;

pub use dashboard::{dashboard, quick_stats, DashboardView, QuickStats};
pub use ledger::{balance_sheet, bill_contribution, net_balance, BalanceEntry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Announcement, Bill, Chore, Group, HouseholdSnapshot, MemberStatus, Priority, Roommate,
    ShoppingItem, ValidationError,
};
pub use notify::{
    AnnouncementNotice, DispatchHandle, DispatchStatus, Dispatcher, InvitationNotice,
    NotificationGateway,
};
pub use reminder::{derive_reminders, Reminder, ReminderKind};
pub use status::{is_bill_overdue, is_chore_due_tomorrow, is_chore_overdue, BILL_GRACE_DAYS};
pub use store::{Account, HouseholdStore, MemoryStore, SqliteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
