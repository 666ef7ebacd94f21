//! End-to-end registration flow against the in-memory grid.

use std::sync::Arc;

use matricula_core::Error;
use matricula_notify::FailingNotifier;

use crate::common::{TestHarness, person};

#[tokio::test]
async fn test_lookup_returns_stored_registration() {
    let harness = TestHarness::seeded().await;
    let found = harness
        .ledger
        .find_by_id_document("12.345.678-9")
        .await
        .expect("lookup should succeed")
        .expect("Ana Silva should be stored");
    assert_eq!(found.full_name, "Ana Silva");
    assert_eq!(found.course.schedules, vec!["2024-03-01 09:00"]);
}

#[tokio::test]
async fn test_duplicate_business_key_rejects_registration() {
    let harness = TestHarness::seeded().await;
    let err = harness
        .ledger
        .register(&person("12.345.678-9", &["2024-03-01 09:00"]))
        .await
        .expect_err("same id and slot must be rejected");
    assert!(matches!(err, Error::DuplicateRegistration { .. }));
    // Nothing written, nothing sent.
    assert_eq!(harness.grid.snapshot(crate::common::SHEET).await.len(), 2);
    assert!(harness.notifier.sent().await.is_empty());
}

#[tokio::test]
async fn test_same_id_different_schedule_lands_on_row_three() {
    let harness = TestHarness::seeded().await;
    harness
        .ledger
        .register(&person("12.345.678-9", &["2024-03-02 14:00"]))
        .await
        .expect("a free slot for the same id should register");

    let snapshot = harness.grid.snapshot(crate::common::SHEET).await;
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[2][1], "2024-03-02 14:00");
    assert_eq!(snapshot[2][3], "12.345.678-9");
}

#[tokio::test]
async fn test_register_then_lookup_round_trips_the_record() {
    let harness = TestHarness::empty().await;
    let registrant = person("98.765.432-1", &["2024-03-01 09:00"]);
    harness
        .ledger
        .register(&registrant)
        .await
        .expect("fresh business key should register");

    let found = harness
        .ledger
        .find_by_id_document("98.765.432-1")
        .await
        .expect("lookup should succeed")
        .expect("the new row should be findable");
    assert_eq!(found, registrant);
}

#[tokio::test]
async fn test_registration_sends_one_confirmation() {
    let harness = TestHarness::empty().await;
    harness
        .ledger
        .register(&person("98.765.432-1", &["2024-03-01 09:00"]))
        .await
        .expect("registration should succeed");

    let sent = harness.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "bruno@x.com");
    assert!(sent[0].subject.contains("Excel Basics"));
}

#[tokio::test]
async fn test_notifier_failure_keeps_the_row() {
    let (grid, ledger) =
        TestHarness::seeded_with_notifier(Arc::new(FailingNotifier::new())).await;

    let err = ledger
        .register(&person("98.765.432-1", &["2024-03-01 09:00"]))
        .await
        .expect_err("the failing notifier must surface");
    assert!(
        matches!(err, Error::Notification { .. }),
        "saved-but-unconfirmed must not look like a persistence failure"
    );

    // The write already happened; the record is findable.
    assert_eq!(grid.snapshot(crate::common::SHEET).await.len(), 3);
    let ledger_check = ledger
        .find_by_id_document("98.765.432-1")
        .await
        .expect("lookup should succeed");
    assert!(ledger_check.is_some());
}

#[tokio::test]
async fn test_sequential_registrations_fill_consecutive_rows() {
    let harness = TestHarness::empty().await;
    for (id, slot) in [
        ("11.111.111-1", "2024-03-01 09:00"),
        ("22.222.222-2", "2024-03-01 09:00"),
        ("33.333.333-3", "2024-03-02 14:00"),
    ] {
        harness
            .ledger
            .register(&person(id, &[slot]))
            .await
            .expect("registration should succeed");
    }

    let snapshot = harness.grid.snapshot(crate::common::SHEET).await;
    assert_eq!(snapshot.len(), 4); // blank header + three data rows
    assert_eq!(snapshot[1][3], "11.111.111-1");
    assert_eq!(snapshot[2][3], "22.222.222-2");
    assert_eq!(snapshot[3][3], "33.333.333-3");
}
