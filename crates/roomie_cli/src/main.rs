//! CLI smoke entry point and demo walkthrough.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roomie_core` linkage.
//! - Seed a small in-memory household and print the derived read
//!   models for quick local sanity checks.

use std::error::Error;
use std::sync::Arc;

use chrono::{Duration, Local, Utc};
use roomie_core::notify::GatewayResult;
use roomie_core::service::announcement_service::{AnnouncementService, NewAnnouncement};
use roomie_core::service::household_service::{HouseholdService, RoommateInvite};
use roomie_core::service::tracker_service::{NewBill, NewChore, TrackerService};
use roomie_core::{
    Account, AnnouncementNotice, Dispatcher, InvitationNotice, MemoryStore, NotificationGateway,
    Priority,
};
use uuid::Uuid;

/// Prints notices instead of sending email.
struct ConsoleGateway;

impl NotificationGateway for ConsoleGateway {
    fn send_invitation(&self, notice: &InvitationNotice) -> GatewayResult<()> {
        println!(
            "  [mail] invitation for {} <{}> from {}",
            notice.roommate_name, notice.roommate_email, notice.invited_by
        );
        Ok(())
    }

    fn send_announcement(&self, notice: &AnnouncementNotice) -> GatewayResult<()> {
        println!(
            "  [mail] announcement \"{}\" ({}) to {} recipient(s)",
            notice.title,
            notice.group_name,
            notice.recipients.len()
        );
        Ok(())
    }
}

fn main() {
    println!("roomie_core version={}", roomie_core::core_version());
    if let Err(err) = run_demo() {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let store = MemoryStore::new();
    let household = HouseholdService::new(&store, Dispatcher::new(Arc::new(ConsoleGateway)));
    let tracker = TrackerService::new(&store);
    let board = AnnouncementService::new(&store, Dispatcher::new(Arc::new(ConsoleGateway)));

    let today = Local::now().date_naive();

    println!("\n== roster ==");
    let ann_user = Uuid::new_v4();
    household.register_account(&Account {
        user_id: ann_user,
        email: "ann@example.com".to_string(),
    })?;
    let ann = household.invite_roommate(&RoommateInvite {
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        invited_by: None,
        group_id: None,
    })?;
    ann.delivery.wait();
    let ann = ann.roommate;
    let ben = household
        .invite_roommate(&RoommateInvite {
            name: "Ben".to_string(),
            email: "ben@example.com".to_string(),
            invited_by: Some(ann_user),
            group_id: None,
        })?;
    ben.delivery.wait();
    let ben = ben.roommate;
    let cara = household
        .invite_roommate(&RoommateInvite {
            name: "Cara".to_string(),
            email: "cara@example.com".to_string(),
            invited_by: Some(ann_user),
            group_id: None,
        })?;
    cara.delivery.wait();
    let cara = cara.roommate;
    for member in household.roster()? {
        println!("  {} <{}> color={}", member.name, member.email, member.color);
    }

    println!("\n== bills ==");
    tracker.add_bill(&NewBill {
        title: "Groceries".to_string(),
        amount: 150.0,
        category: "Food".to_string(),
        paid_by: ann.id,
        split_between: vec![ann.id, ben.id, cara.id],
        date: today - Duration::days(2),
    })?;
    tracker.add_bill(&NewBill {
        title: "Internet".to_string(),
        amount: 60.0,
        category: String::new(),
        paid_by: ben.id,
        split_between: vec![ann.id, ben.id],
        date: today,
    })?;
    for entry in tracker.balances()? {
        println!("  {:<8} {:+.2}", entry.roommate_id, entry.net);
    }

    println!("\n== chores ==");
    tracker.add_chore(&NewChore {
        title: "Dishes".to_string(),
        description: "Evening round".to_string(),
        assigned_to: ben.id,
        due_date: today + Duration::days(1),
        priority: Priority::Medium,
    })?;
    tracker.add_chore(&NewChore {
        title: "Take out trash".to_string(),
        description: String::new(),
        assigned_to: cara.id,
        due_date: today - Duration::days(1),
        priority: Priority::Low,
    })?;
    let done = tracker.add_chore(&NewChore {
        title: "Water plants".to_string(),
        description: String::new(),
        assigned_to: ann.id,
        due_date: today,
        priority: Priority::Low,
    })?;
    tracker.toggle_chore(done.id, today)?;

    println!("\n== shopping ==");
    let towels = tracker.add_shopping_item("Paper towels", ann.id, today)?;
    tracker.add_shopping_item("Dish soap", ben.id, today)?;
    tracker.purchase_item(towels.id, cara.id, today)?;
    for item in tracker.snapshot()?.shopping_items {
        let state = if item.purchased { "bought" } else { "needed" };
        println!("  [{state}] {}", item.item);
    }

    println!("\n== announcements ==");
    let posted = board.post_announcement(
        &NewAnnouncement {
            title: "House meeting".to_string(),
            content: "Sunday 18:00 in the kitchen".to_string(),
            created_by: ann_user,
            group_id: None,
            expires_at: None,
        },
        Utc::now(),
    )?;
    posted.delivery.wait();
    for announcement in board.active_announcements(Utc::now())? {
        println!("  {} -- {}", announcement.title, announcement.content);
    }

    println!("\n== reminders for {today} ==");
    for reminder in tracker.reminders(today)? {
        println!("  [{}] {}", reminder.priority.as_str(), reminder.message);
    }

    println!("\n== dashboard ==");
    let stats = tracker.quick_stats(today)?;
    println!(
        "  bills={} chores done={} pending={} overdue={}",
        stats.total_bills, stats.completed_chores, stats.pending_chores, stats.overdue_chores
    );
    let view = tracker.dashboard()?;
    for balance in &view.balances {
        println!("  {:<6} {:+.2}", balance.name, balance.net);
    }
    println!(
        "  chores completed: {}/{}",
        view.chores_completed, view.chores_total
    );
    for bill in &view.recent_bills {
        let state = if bill.settled { "settled" } else { "pending" };
        println!("  recent: {} ${:.2} paid by {} ({state})", bill.title, bill.amount, bill.paid_by);
    }

    Ok(())
}
