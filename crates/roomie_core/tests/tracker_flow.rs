use chrono::NaiveDate;
use roomie_core::service::tracker_service::{
    NewBill, NewChore, TrackerService, TrackerServiceError,
};
use roomie_core::{
    HouseholdStore, MemoryStore, Priority, ReminderKind, Roommate, StoreError, ValidationError,
};
use uuid::Uuid;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn seed_pair(store: &MemoryStore) -> (Roommate, Roommate) {
    let ann = Roommate::invited("Ann", "ann@home.test", "blue", None, None);
    let ben = Roommate::invited("Ben", "ben@home.test", "green", None, None);
    store.insert_roommate(&ann).unwrap();
    store.insert_roommate(&ben).unwrap();
    (ann, ben)
}

fn split_bill(ann: &Roommate, ben: &Roommate) -> NewBill {
    NewBill {
        title: "Groceries".to_string(),
        amount: 100.0,
        category: "Food".to_string(),
        paid_by: ann.id,
        split_between: vec![ann.id, ben.id],
        date: day("2024-05-20"),
    }
}

#[test]
fn add_bill_persists_and_blank_category_falls_back() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    let mut request = split_bill(&ann, &ben);
    request.category = "  ".to_string();
    let bill = service.add_bill(&request).unwrap();
    assert_eq!(bill.category, "Other");
    assert!(!bill.settled);

    let stored = store.list_bills().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], bill);
}

#[test]
fn add_bill_with_empty_split_is_rejected() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    let mut request = split_bill(&ann, &ben);
    request.split_between = Vec::new();
    let err = service.add_bill(&request).unwrap_err();
    assert!(matches!(
        err,
        TrackerServiceError::Store(StoreError::Validation(ValidationError::EmptySplit))
    ));
    assert!(store.list_bills().unwrap().is_empty());
}

#[test]
fn settling_a_bill_zeroes_the_balances() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    let bill = service.add_bill(&split_bill(&ann, &ben)).unwrap();
    assert_eq!(service.balance_of(ann.id).unwrap(), 50.0);
    assert_eq!(service.balance_of(ben.id).unwrap(), -50.0);

    service.settle_bill(bill.id).unwrap();
    assert_eq!(service.balance_of(ann.id).unwrap(), 0.0);
    assert_eq!(service.balance_of(ben.id).unwrap(), 0.0);

    let missing = Uuid::new_v4();
    let err = service.settle_bill(missing).unwrap_err();
    assert!(matches!(err, TrackerServiceError::BillNotFound(id) if id == missing));
}

#[test]
fn balances_follow_roster_order() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);
    service.add_bill(&split_bill(&ann, &ben)).unwrap();

    let balances = service.balances().unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].roommate_id, ann.id);
    assert_eq!(balances[0].net, 50.0);
    assert_eq!(balances[1].roommate_id, ben.id);
    assert_eq!(balances[1].net, -50.0);
}

#[test]
fn toggling_a_chore_stamps_today_and_toggling_again_clears_it() {
    let store = MemoryStore::new();
    let (ann, _) = seed_pair(&store);
    let service = TrackerService::new(&store);

    let chore = service
        .add_chore(&NewChore {
            title: "Dishes".to_string(),
            description: "Dinner dishes".to_string(),
            assigned_to: ann.id,
            due_date: day("2024-05-23"),
            priority: Priority::Medium,
        })
        .unwrap();
    assert!(!chore.completed);

    let done = service.toggle_chore(chore.id, day("2024-05-22")).unwrap();
    assert!(done.completed);
    assert_eq!(done.completed_date, Some(day("2024-05-22")));

    let reopened = service.toggle_chore(chore.id, day("2024-05-24")).unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_date, None);

    let missing = Uuid::new_v4();
    let err = service.toggle_chore(missing, day("2024-05-22")).unwrap_err();
    assert!(matches!(err, TrackerServiceError::ChoreNotFound(id) if id == missing));
}

#[test]
fn shopping_items_flow_through_the_service() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    let milk = service
        .add_shopping_item("Milk", ann.id, day("2024-05-20"))
        .unwrap();
    assert!(milk.is_pending());

    service
        .purchase_item(milk.id, ben.id, day("2024-05-22"))
        .unwrap();
    let snapshot = service.snapshot().unwrap();
    assert!(snapshot.shopping_items[0].purchased);
    assert_eq!(snapshot.shopping_items[0].purchased_by, Some(ben.id));

    service.remove_shopping_item(milk.id).unwrap();
    let err = service.remove_shopping_item(milk.id).unwrap_err();
    assert!(matches!(err, TrackerServiceError::ItemNotFound(id) if id == milk.id));
}

#[test]
fn reminders_come_from_the_stored_snapshot() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    service.add_bill(&split_bill(&ann, &ben)).unwrap();
    service
        .add_chore(&NewChore {
            title: "Trash".to_string(),
            description: String::new(),
            assigned_to: ben.id,
            due_date: day("2024-05-23"),
            priority: Priority::Low,
        })
        .unwrap();

    let reminders = service.reminders(day("2024-05-22")).unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].kind, ReminderKind::Bill);
    assert_eq!(reminders[0].roommate_id, ben.id);
    assert_eq!(
        reminders[0].message,
        "Ben hasn't paid their share of \"Groceries\" ($50.00)"
    );
    assert_eq!(reminders[1].kind, ReminderKind::Chore);
    assert_eq!(reminders[1].message, "Ben has \"Trash\" due tomorrow");
}

#[test]
fn dashboard_reflects_the_stored_snapshot() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    for n in 0..4 {
        let mut request = split_bill(&ann, &ben);
        request.title = format!("Bill {n}");
        service.add_bill(&request).unwrap();
    }
    let chore = service
        .add_chore(&NewChore {
            title: "Dishes".to_string(),
            description: String::new(),
            assigned_to: ann.id,
            due_date: day("2024-05-23"),
            priority: Priority::Low,
        })
        .unwrap();
    service.toggle_chore(chore.id, day("2024-05-22")).unwrap();

    let view = service.dashboard().unwrap();
    assert_eq!(view.balances.len(), 2);
    assert_eq!(view.balances[0].name, "Ann");
    assert_eq!(view.balances[0].net, 200.0);
    assert_eq!(view.recent_bills.len(), 3);
    assert_eq!(view.recent_bills[0].title, "Bill 0");
    assert_eq!(view.recent_bills[0].paid_by, "Ann");
    assert_eq!(view.chores_completed, 1);
    assert_eq!(view.chores_total, 1);
    assert_eq!(view.progress[0].percent(), 100.0);
}

#[test]
fn quick_stats_count_bills_and_chore_states() {
    let store = MemoryStore::new();
    let (ann, ben) = seed_pair(&store);
    let service = TrackerService::new(&store);

    service.add_bill(&split_bill(&ann, &ben)).unwrap();
    service.add_bill(&split_bill(&ann, &ben)).unwrap();
    let done = service
        .add_chore(&NewChore {
            title: "Dishes".to_string(),
            description: String::new(),
            assigned_to: ann.id,
            due_date: day("2024-05-22"),
            priority: Priority::Low,
        })
        .unwrap();
    service.toggle_chore(done.id, day("2024-05-22")).unwrap();
    service
        .add_chore(&NewChore {
            title: "Trash".to_string(),
            description: String::new(),
            assigned_to: ben.id,
            due_date: day("2024-05-20"),
            priority: Priority::Low,
        })
        .unwrap();

    let stats = service.quick_stats(day("2024-05-22")).unwrap();
    assert_eq!(stats.total_bills, 2);
    assert_eq!(stats.completed_chores, 1);
    assert_eq!(stats.pending_chores, 1);
    assert_eq!(stats.overdue_chores, 1);
}
