//! Shared harness for ledger integration tests.

use std::sync::Arc;

use matricula_core::{Course, Person};
use matricula_grid::MemoryGrid;
use matricula_ledger::RegistrationLedger;
use matricula_notify::{Notifier, RecordingNotifier};

/// Sheet title used by every integration test.
pub const SHEET: &str = "Registrations";

/// The stored row the duplicate/lookup scenarios start from.
pub fn ana_row() -> Vec<String> {
    [
        "Excel Basics",
        "2024-03-01 09:00",
        "Ana Silva",
        "12.345.678-9",
        "1990-01-01",
        "34",
        "Rua A",
        "ana@x.com",
        "11999999999",
        "yes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A valid registrant for the given id document and schedule slots.
pub fn person(id_document: &str, schedules: &[&str]) -> Person {
    Person {
        course: Course {
            name: "Excel Basics".to_string(),
            schedules: schedules.iter().map(|s| s.to_string()).collect(),
        },
        full_name: "Bruno Costa".to_string(),
        id_document: id_document.to_string(),
        birth_date: chrono::NaiveDate::from_ymd_opt(1988, 6, 15),
        age: 36,
        address: "Rua B".to_string(),
        email: "bruno@x.com".to_string(),
        phone: "11888888888".to_string(),
        confirmation_status: "yes".to_string(),
    }
}

/// Test harness: a grid seeded with the Ana Silva row, a recording
/// notifier, and a ledger wired over both.
pub struct TestHarness {
    /// Backing grid, for direct snapshots.
    pub grid: Arc<MemoryGrid>,
    /// Outbox recorder.
    pub notifier: Arc<RecordingNotifier>,
    /// Ledger under test.
    pub ledger: RegistrationLedger,
}

impl TestHarness {
    /// Harness with the Ana Silva row already stored at row 2.
    pub async fn seeded() -> Self {
        let grid = Arc::new(MemoryGrid::new());
        grid.seed(SHEET, 2, vec![ana_row()]).await;
        Self::over(grid).await
    }

    /// Harness over an empty grid.
    pub async fn empty() -> Self {
        Self::over(Arc::new(MemoryGrid::new())).await
    }

    async fn over(grid: Arc<MemoryGrid>) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let ledger = RegistrationLedger::new(grid.clone(), notifier.clone(), SHEET);
        Self {
            grid,
            notifier,
            ledger,
        }
    }

    /// Harness with the seeded grid but a custom notifier.
    pub async fn seeded_with_notifier(notifier: Arc<dyn Notifier>) -> (Arc<MemoryGrid>, RegistrationLedger) {
        let grid = Arc::new(MemoryGrid::new());
        grid.seed(SHEET, 2, vec![ana_row()]).await;
        let ledger = RegistrationLedger::new(grid.clone(), notifier, SHEET);
        (grid, ledger)
    }
}
