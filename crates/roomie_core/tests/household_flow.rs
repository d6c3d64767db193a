use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, TimeZone, Utc};
use roomie_core::service::household_service::{
    HouseholdService, HouseholdServiceError, RoommateInvite,
};
use roomie_core::store::CascadeReport;
use roomie_core::{
    Account, Bill, Chore, Dispatcher, DispatchStatus, Group, HouseholdStore, MemberStatus,
    MemoryStore, Priority, Roommate,
};
use roomie_core::notify::{
    AnnouncementNotice, GatewayResult, InvitationNotice, NotificationError, NotificationGateway,
};
use uuid::Uuid;

#[derive(Default)]
struct RecordingGateway {
    invitations: Mutex<Vec<InvitationNotice>>,
    fail: bool,
}

impl NotificationGateway for RecordingGateway {
    fn send_invitation(&self, notice: &InvitationNotice) -> GatewayResult<()> {
        self.invitations.lock().unwrap().push(notice.clone());
        if self.fail {
            return Err(NotificationError::new("smtp_down", "relay unreachable"));
        }
        Ok(())
    }

    fn send_announcement(&self, _notice: &AnnouncementNotice) -> GatewayResult<()> {
        Ok(())
    }
}

fn service_over<'a>(
    store: &'a MemoryStore,
    gateway: &Arc<RecordingGateway>,
) -> HouseholdService<'a, MemoryStore> {
    let dispatcher = Dispatcher::new(Arc::clone(gateway) as Arc<dyn NotificationGateway>);
    HouseholdService::new(store, dispatcher)
}

fn invite(name: &str, email: &str) -> RoommateInvite {
    RoommateInvite {
        name: name.to_string(),
        email: email.to_string(),
        invited_by: None,
        group_id: None,
    }
}

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn unknown_email_joins_as_invited_new_user() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let outcome = service.invite_roommate(&invite("Ben", "ben@home.test")).unwrap();
    assert_eq!(outcome.roommate.status, Some(MemberStatus::Invited));
    assert_eq!(outcome.roommate.user_id, None);
    assert_eq!(outcome.delivery.wait(), DispatchStatus::Sent);

    let sent = gateway.invitations.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].roommate_name, "Ben");
    assert_eq!(sent[0].roommate_email, "ben@home.test");
    assert_eq!(sent[0].invited_by, "Your roommate");
    assert!(sent[0].is_new_user);
}

#[test]
fn known_email_joins_as_registered() {
    let store = MemoryStore::new();
    let account = Account {
        user_id: Uuid::new_v4(),
        email: "ben@home.test".to_string(),
    };
    store.register_account(&account).unwrap();

    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let outcome = service.invite_roommate(&invite("Ben", "ben@home.test")).unwrap();
    assert_eq!(outcome.roommate.status, Some(MemberStatus::Registered));
    assert_eq!(outcome.roommate.user_id, Some(account.user_id));
    assert_eq!(outcome.delivery.wait(), DispatchStatus::Sent);

    let sent = gateway.invitations.lock().unwrap();
    assert!(!sent[0].is_new_user);
}

#[test]
fn palette_colors_cycle_with_roster_size() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let mut colors = Vec::new();
    for n in 0..7 {
        let outcome = service
            .invite_roommate(&invite(&format!("Member{n}"), &format!("m{n}@home.test")))
            .unwrap();
        outcome.delivery.wait();
        colors.push(outcome.roommate.color);
    }
    assert_eq!(
        colors,
        vec!["blue", "green", "purple", "red", "yellow", "pink", "blue"]
    );
}

#[test]
fn inviter_name_is_resolved_from_the_roster() {
    let store = MemoryStore::new();
    let ann_user = Uuid::new_v4();
    store
        .insert_roommate(&Roommate::registered("Ann", "ann@home.test", "blue", ann_user))
        .unwrap();

    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let request = RoommateInvite {
        name: "Ben".to_string(),
        email: "ben@home.test".to_string(),
        invited_by: Some(ann_user),
        group_id: None,
    };
    let outcome = service.invite_roommate(&request).unwrap();
    assert_eq!(outcome.roommate.invited_by, Some(ann_user));
    outcome.delivery.wait();

    let sent = gateway.invitations.lock().unwrap();
    assert_eq!(sent[0].invited_by, "Ann");
}

#[test]
fn unresolvable_inviter_falls_back_to_generic_label() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let request = RoommateInvite {
        name: "Ben".to_string(),
        email: "ben@home.test".to_string(),
        invited_by: Some(Uuid::new_v4()),
        group_id: None,
    };
    service.invite_roommate(&request).unwrap().delivery.wait();

    let sent = gateway.invitations.lock().unwrap();
    assert_eq!(sent[0].invited_by, "Your roommate");
}

#[test]
fn duplicate_email_fails_before_any_email_goes_out() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    service
        .invite_roommate(&invite("Ben", "ben@home.test"))
        .unwrap()
        .delivery
        .wait();

    let err = service
        .invite_roommate(&invite("Benny", "BEN@home.test"))
        .unwrap_err();
    assert!(matches!(err, HouseholdServiceError::AlreadyRoommate(email) if email == "BEN@home.test"));

    assert_eq!(service.roster().unwrap().len(), 1);
    assert_eq!(gateway.invitations.lock().unwrap().len(), 1);
}

#[test]
fn failed_delivery_leaves_the_member_in_place() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway {
        fail: true,
        ..RecordingGateway::default()
    });
    let service = service_over(&store, &gateway);

    let outcome = service.invite_roommate(&invite("Ben", "ben@home.test")).unwrap();
    let status = outcome.delivery.wait();
    assert!(matches!(status, DispatchStatus::Failed(_)));

    let roster = service.roster().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].email, "ben@home.test");
}

#[test]
fn registering_claims_a_pending_invite_ignoring_case() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let invited = service
        .invite_roommate(&invite("Ben", "ben@home.test"))
        .unwrap();
    invited.delivery.wait();

    let account = Account {
        user_id: Uuid::new_v4(),
        email: "BEN@home.test".to_string(),
    };
    let claimed = service.register_account(&account).unwrap().unwrap();
    assert_eq!(claimed.id, invited.roommate.id);
    assert_eq!(claimed.user_id, Some(account.user_id));
    assert_eq!(claimed.status, Some(MemberStatus::Registered));

    let stored = store.get_roommate(claimed.id).unwrap().unwrap();
    assert_eq!(stored.user_id, Some(account.user_id));
}

#[test]
fn registering_without_a_pending_invite_links_nothing() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let account = Account {
        user_id: Uuid::new_v4(),
        email: "solo@home.test".to_string(),
    };
    assert!(service.register_account(&account).unwrap().is_none());
    assert!(store.find_account_by_email("solo@home.test").unwrap().is_some());
}

#[test]
fn removal_reports_the_cascade() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let ann = service
        .invite_roommate(&invite("Ann", "ann@home.test"))
        .unwrap();
    ann.delivery.wait();
    let ann_id = ann.roommate.id;
    store
        .insert_bill(&Bill::new(
            "Groceries",
            90.0,
            "Food",
            ann_id,
            vec![ann_id],
            day("2024-05-20"),
        ))
        .unwrap();
    store
        .insert_chore(&Chore::new("Dishes", "", ann_id, day("2024-05-23"), Priority::Low))
        .unwrap();

    let report = service.remove_roommate(ann_id).unwrap();
    assert_eq!(
        report,
        CascadeReport {
            bills_removed: 1,
            chores_removed: 1,
        }
    );

    let err = service.remove_roommate(ann_id).unwrap_err();
    assert!(matches!(err, HouseholdServiceError::RoommateNotFound(id) if id == ann_id));
}

#[test]
fn group_lifecycle_through_the_service() {
    let store = MemoryStore::new();
    let gateway = Arc::new(RecordingGateway::default());
    let service = service_over(&store, &gateway);

    let group = Group::new(
        "Upstairs",
        Uuid::new_v4(),
        Utc.with_ymd_and_hms(2024, 5, 22, 8, 0, 0).unwrap(),
    );
    service.create_group(&group).unwrap();
    assert_eq!(service.groups().unwrap().len(), 1);

    service.delete_group(group.id).unwrap();
    assert!(service.groups().unwrap().is_empty());

    let err = service.delete_group(group.id).unwrap_err();
    assert!(matches!(err, HouseholdServiceError::GroupNotFound(id) if id == group.id));
}
