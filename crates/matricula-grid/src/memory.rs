//! In-process grid backend.
//!
//! [`MemoryGrid`] implements the [`GridClient`] contract over a map of
//! sheet titles to row vectors. It mimics the remote store's sparse
//! behavior: reads drop trailing empty cells and rows, and a range with
//! no data yields zero rows rather than an error. Used by the ledger
//! tests and handy for local development without credentials.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use matricula_core::{Error, Result};
use tokio::sync::RwLock;

use crate::a1::SheetRange;
use crate::client::{GridClient, RangeWrite};

/// Grid backend storing sheets in memory.
#[derive(Default)]
pub struct MemoryGrid {
    sheets: RwLock<HashMap<String, Vec<Vec<String>>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryGrid {
    /// Creates an empty grid with no sheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `rows` on `sheet` starting at 1-based `start_row`, column A.
    ///
    /// Rows before `start_row` are left empty, so seeding data at row 2
    /// leaves a blank header row the way a real sheet would have one.
    pub async fn seed(&self, sheet: &str, start_row: usize, rows: Vec<Vec<String>>) {
        let mut sheets = self.sheets.write().await;
        let stored = sheets.entry(sheet.to_string()).or_default();
        place_rows(stored, start_row, 0, &rows);
    }

    /// Full contents of `sheet` (row 1 first) for test assertions.
    pub async fn snapshot(&self, sheet: &str) -> Vec<Vec<String>> {
        self.sheets
            .read()
            .await
            .get(sheet)
            .cloned()
            .unwrap_or_default()
    }

    /// Makes every subsequent read fail with a persistence error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail with a persistence error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

/// Writes `rows` into `stored` at the given 1-based row / 0-based column
/// origin, growing the sheet as needed.
fn place_rows(stored: &mut Vec<Vec<String>>, start_row: usize, start_col: usize, rows: &[Vec<String>]) {
    for (offset, row) in rows.iter().enumerate() {
        let target = start_row - 1 + offset;
        if stored.len() <= target {
            stored.resize(target + 1, Vec::new());
        }
        let stored_row = &mut stored[target];
        for (col_offset, value) in row.iter().enumerate() {
            let col = start_col + col_offset;
            if stored_row.len() <= col {
                stored_row.resize(col + 1, String::new());
            }
            stored_row[col] = value.clone();
        }
    }
}

/// Trims trailing empty cells, then trailing empty rows, the way the
/// remote API omits them.
fn sparsify(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    for row in &mut rows {
        while row.last().is_some_and(|cell| cell.is_empty()) {
            row.pop();
        }
    }
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    rows
}

#[async_trait]
impl GridClient for MemoryGrid {
    async fn read_range(&self, range: &SheetRange) -> Result<Vec<Vec<String>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::persistence(format!(
                "injected read failure for {range}"
            )));
        }
        let sheets = self.sheets.read().await;
        let Some(stored) = sheets.get(&range.sheet) else {
            return Ok(Vec::new());
        };

        let cells = &range.cells;
        let first = cells.start_row - 1;
        let last = cells
            .end_row
            .map(|row| row.min(stored.len()))
            .unwrap_or(stored.len());
        if first >= last {
            return Ok(Vec::new());
        }

        let window = stored[first..last]
            .iter()
            .map(|row| {
                let from = cells.start_col.min(row.len());
                let to = cells
                    .end_col
                    .map(|col| (col + 1).min(row.len()))
                    .unwrap_or(row.len());
                row[from..to].to_vec()
            })
            .collect();
        Ok(sparsify(window))
    }

    async fn write_batch(&self, writes: &[RangeWrite]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::persistence("injected write failure"));
        }
        let mut sheets = self.sheets.write().await;
        for write in writes {
            let stored = sheets.entry(write.range.sheet.clone()).or_default();
            place_rows(
                stored,
                write.range.cells.start_row,
                write.range.cells.start_col,
                &write.rows,
            );
        }
        Ok(())
    }

    async fn update_cells(&self, range: &SheetRange, rows: Vec<Vec<String>>) -> Result<()> {
        self.write_batch(&[RangeWrite::new(range.clone(), rows)])
            .await
    }
}
