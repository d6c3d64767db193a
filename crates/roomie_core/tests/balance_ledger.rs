use chrono::NaiveDate;
use roomie_core::ledger::unsettled_total;
use roomie_core::{balance_sheet, bill_contribution, net_balance, Bill};
use uuid::Uuid;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn bill(amount: f64, paid_by: Uuid, split: Vec<Uuid>) -> Bill {
    Bill::new("Groceries", amount, "Food", paid_by, split, day("2024-05-01"))
}

#[test]
fn splits_one_bill_across_payer_and_participants() {
    let (ann, ben, cara) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let bills = vec![bill(150.0, ann, vec![ann, ben, cara])];

    assert_eq!(net_balance(&bills, ann), 100.0);
    assert_eq!(net_balance(&bills, ben), -50.0);
    assert_eq!(net_balance(&bills, cara), -50.0);
}

#[test]
fn payer_gains_one_share_per_other_participant() {
    let (ann, ben, cara, dave) = (
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
    let b = bill(100.0, ann, vec![ann, ben, cara, dave]);

    assert_eq!(bill_contribution(&b, ann), 75.0);
    assert_eq!(bill_contribution(&b, ben), -25.0);

    let total: f64 = [ann, ben, cara, dave]
        .iter()
        .map(|&id| bill_contribution(&b, id))
        .sum();
    assert_eq!(total, 0.0);
}

#[test]
fn settled_bills_contribute_nothing() {
    let (ann, ben) = (Uuid::new_v4(), Uuid::new_v4());
    let mut settled = bill(80.0, ann, vec![ann, ben]);
    settled.settle();
    let bills = vec![settled];

    assert_eq!(net_balance(&bills, ann), 0.0);
    assert_eq!(net_balance(&bills, ben), 0.0);
}

#[test]
fn bystander_is_untouched_by_other_bills() {
    let (ann, ben, outsider) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let bills = vec![bill(90.0, ann, vec![ann, ben])];

    assert_eq!(net_balance(&bills, outsider), 0.0);
}

#[test]
fn payer_outside_split_is_credited_one_share_per_participant_minus_one() {
    let (ann, ben, cara) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let bills = vec![bill(100.0, ann, vec![ben, cara])];

    // The divisor stays the split size; the payer collects
    // (participants - 1) shares even when not listed themselves.
    assert_eq!(net_balance(&bills, ann), 50.0);
    assert_eq!(net_balance(&bills, ben), -50.0);
    assert_eq!(net_balance(&bills, cara), -50.0);
}

#[test]
fn mixed_ledger_accumulates_per_bill_contributions() {
    let (ann, ben) = (Uuid::new_v4(), Uuid::new_v4());
    let mut paid_back = bill(40.0, ben, vec![ann, ben]);
    paid_back.settle();
    let bills = vec![
        bill(100.0, ann, vec![ann, ben]),
        bill(30.0, ben, vec![ann, ben]),
        paid_back,
    ];

    assert_eq!(net_balance(&bills, ann), 35.0);
    assert_eq!(net_balance(&bills, ben), -35.0);
}

#[test]
fn balance_sheet_follows_roster_order_and_sums_to_zero() {
    let (ann, ben, cara) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let bills = vec![
        bill(150.0, ann, vec![ann, ben, cara]),
        bill(60.0, ben, vec![ann, ben]),
    ];

    let sheet = balance_sheet(&bills, &[ann, ben, cara]);
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet[0].roommate_id, ann);
    assert_eq!(sheet[1].roommate_id, ben);
    assert_eq!(sheet[2].roommate_id, cara);

    let total: f64 = sheet.iter().map(|entry| entry.net).sum();
    assert!(total.abs() < 1e-9);
}

#[test]
fn unsettled_total_ignores_settled_bills() {
    let (ann, ben) = (Uuid::new_v4(), Uuid::new_v4());
    let mut old = bill(25.0, ann, vec![ann, ben]);
    old.settle();
    let bills = vec![bill(100.0, ann, vec![ann, ben]), old];

    assert_eq!(unsettled_total(&bills), 100.0);
}

#[test]
fn identical_inputs_give_identical_output() {
    let (ann, ben) = (Uuid::new_v4(), Uuid::new_v4());
    let bills = vec![bill(75.0, ann, vec![ann, ben])];

    assert_eq!(net_balance(&bills, ben), net_balance(&bills, ben));
    assert_eq!(
        balance_sheet(&bills, &[ann, ben]),
        balance_sheet(&bills, &[ann, ben])
    );
}
