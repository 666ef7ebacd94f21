//! The registration ledger: append, lookup, and duplicate prevention.
//!
//! The ledger is stateless between calls: the grid owns all persisted
//! state and every operation re-reads the range it needs. Registration is
//! two-phase: persist first, notify second, with the two failure modes
//! kept distinct so callers can tell "nothing saved" from "saved but
//! unconfirmed".
//!
//! # Concurrency
//!
//! Row allocation is a read-then-compute over the current data range with
//! no remote locking. A per-instance async mutex serializes allocate+write
//! within this process, but two separate processes can still observe the
//! same row count and collide; the remote store resolves such races as
//! last-write-wins. Callers needing stronger guarantees must serialize
//! externally.

use std::sync::Arc;

use chrono::Utc;
use matricula_core::{Error, Person, Result};
use matricula_grid::{CellRange, GridClient, RangeWrite, SheetRange};
use matricula_notify::{Notifier, confirmation_for};
use tokio::sync::Mutex;

use crate::codec::{self, COL_ID_DOCUMENT, COL_SCHEDULE, ROW_WIDTH};

/// First data row; row 1 is the header.
const DATA_START_ROW: usize = 2;

/// Case-insensitive, whitespace-trimmed form used for business-key
/// comparisons.
fn normalized(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Append/lookup/dedup engine over one registrations sheet.
pub struct RegistrationLedger {
    grid: Arc<dyn GridClient>,
    notifier: Arc<dyn Notifier>,
    sheet: String,
    append_lock: Mutex<()>,
}

impl RegistrationLedger {
    /// Creates a ledger over `sheet`, persisting through `grid` and
    /// confirming through `notifier`.
    pub fn new<S: Into<String>>(
        grid: Arc<dyn GridClient>,
        notifier: Arc<dyn Notifier>,
        sheet: S,
    ) -> Self {
        Self {
            grid,
            notifier,
            sheet: sheet.into(),
            append_lock: Mutex::new(()),
        }
    }

    fn range(&self, cells: CellRange) -> SheetRange {
        SheetRange::new(&self.sheet, cells)
    }

    /// First unused data row: the count of existing rows plus the header
    /// offset.
    ///
    /// Absent concurrent writers this is the next free row; see the
    /// module docs for the allocation race this does not close.
    pub async fn next_available_row(&self) -> Result<usize> {
        let data = self
            .grid
            .read_range(&self.range(CellRange::open(0, DATA_START_ROW, ROW_WIDTH - 1)))
            .await?;
        let next = data.len() + DATA_START_ROW;
        tracing::debug!(sheet = %self.sheet, next_row = next, "computed next available row");
        Ok(next)
    }

    /// Whether `(id_document, schedule)` already exists in the ledger.
    ///
    /// Reads the id-document and schedule columns as parallel ranges and
    /// compares row-by-row; a match requires both fields to match at the
    /// same index, case-insensitively after trimming. An empty column
    /// means no registrations, hence no duplicate.
    pub async fn is_already_registered(&self, id_document: &str, schedule: &str) -> Result<bool> {
        let ids = self
            .grid
            .read_range(&self.range(CellRange::column(COL_ID_DOCUMENT, DATA_START_ROW)))
            .await?;
        let schedules = self
            .grid
            .read_range(&self.range(CellRange::column(COL_SCHEDULE, DATA_START_ROW)))
            .await?;
        if ids.is_empty() || schedules.is_empty() {
            return Ok(false);
        }

        let wanted_id = normalized(id_document);
        let wanted_schedule = normalized(schedule);
        for (index, id_row) in ids.iter().enumerate() {
            let row_id = id_row.first().map(String::as_str).unwrap_or("");
            let row_schedule = schedules
                .get(index)
                .and_then(|row| row.first())
                .map(String::as_str)
                .unwrap_or("");
            if normalized(row_id) == wanted_id && normalized(row_schedule) == wanted_schedule {
                tracing::info!(
                    id_document,
                    schedule,
                    row = index + DATA_START_ROW,
                    "found existing registration"
                );
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Registers `person`: validate, dedup-check every selected schedule,
    /// append one row per schedule, then send the confirmation.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRecord`] — required fields missing; no I/O done.
    /// - [`Error::DuplicateRegistration`] — some selected schedule already
    ///   holds this id document; nothing written.
    /// - [`Error::Persistence`] — the write failed; the registration is
    ///   not saved and may be retried from scratch (the dedup check runs
    ///   again on every attempt, so a retry after an ambiguous failure is
    ///   safe).
    /// - [`Error::Notification`] — the write succeeded but the
    ///   confirmation was not delivered. The registration stays persisted.
    pub async fn register(&self, person: &Person) -> Result<()> {
        person.validate_for_registration()?;
        tracing::info!(
            id_document = %person.id_document,
            course = %person.course.name,
            "starting registration"
        );

        for schedule in person.selected_schedules() {
            if self
                .is_already_registered(&person.id_document, schedule)
                .await?
            {
                return Err(Error::duplicate(&person.id_document, schedule));
            }
        }

        {
            let _serialized = self.append_lock.lock().await;
            let first_row = self.next_available_row().await?;
            let rows: Vec<Vec<String>> = person
                .selected_schedules()
                .map(|schedule| codec::encode(person, schedule))
                .collect();
            let last_row = first_row + rows.len() - 1;
            let target = self.range(CellRange::bounded(0, first_row, ROW_WIDTH - 1, last_row));
            tracing::debug!(range = %target, "appending registration rows");
            self.grid
                .write_batch(&[RangeWrite::new(target, rows)])
                .await?;
        }
        tracing::info!(id_document = %person.id_document, "registration persisted");

        let message = confirmation_for(person, Utc::now());
        self.notifier.notify(&message).await?;
        Ok(())
    }

    /// Looks up the first registration carrying `id_document`.
    ///
    /// Returns `Ok(None)` on a miss; a missing person is not an error in
    /// the ledger's contract. The matched row is re-read in full and
    /// decoded; short rows decode with absent trailing fields.
    pub async fn find_by_id_document(&self, id_document: &str) -> Result<Option<Person>> {
        let ids = self
            .grid
            .read_range(&self.range(CellRange::column(COL_ID_DOCUMENT, DATA_START_ROW)))
            .await?;

        let wanted = normalized(id_document);
        for (index, id_row) in ids.iter().enumerate() {
            let row_id = id_row.first().map(String::as_str).unwrap_or("");
            if normalized(row_id) != wanted {
                continue;
            }
            let row_number = index + DATA_START_ROW;
            tracing::debug!(id_document, row = row_number, "id document matched");
            let rows = self
                .grid
                .read_range(&self.range(CellRange::bounded(
                    0,
                    row_number,
                    ROW_WIDTH - 1,
                    row_number,
                )))
                .await?;
            let Some(row) = rows.first() else {
                return Ok(None);
            };
            return codec::decode(row).map(Some);
        }
        Ok(None)
    }
}
