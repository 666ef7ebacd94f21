//! The grid client contract.
//!
//! Everything the ledger needs from the remote tabular store is expressed
//! here: range reads, batch writes, and the narrow cell update used by the
//! course-time operation. Implementations live elsewhere (`MemoryGrid` in
//! this crate, the Google Sheets adapter in `matricula-sheets`) so the
//! ledger can be exercised against a fake.

use async_trait::async_trait;
use matricula_core::Result;

use crate::a1::SheetRange;

/// One range plus the rows to place there, as part of a batch write.
#[derive(Debug, Clone)]
pub struct RangeWrite {
    /// Target range; rows are laid out from its top-left cell.
    pub range: SheetRange,
    /// Row-major cell values to write.
    pub rows: Vec<Vec<String>>,
}

impl RangeWrite {
    /// Pairs a target range with the rows to write there.
    pub fn new(range: SheetRange, rows: Vec<Vec<String>>) -> Self {
        Self { range, rows }
    }
}

/// Read/write access to a remote tabular store addressed by sheet title
/// and A1 cell range.
///
/// # Contract
///
/// - [`read_range`](GridClient::read_range) returns zero rows when the
///   range holds no data; an empty range is never an error. Trailing
///   empty cells and rows may be omitted, so callers must tolerate short
///   rows.
/// - [`write_batch`](GridClient::write_batch) submits one logical batch.
///   No partial-row guarantee is made on failure; callers must treat a
///   failed write as "unknown state" and re-check before retrying.
/// - [`update_cells`](GridClient::update_cells) rewrites an exact range
///   in place and is used only by the course-time update.
#[async_trait]
pub trait GridClient: Send + Sync {
    /// Read all populated cells within `range`.
    async fn read_range(&self, range: &SheetRange) -> Result<Vec<Vec<String>>>;

    /// Write every `(range, rows)` pair in one batch.
    async fn write_batch(&self, writes: &[RangeWrite]) -> Result<()>;

    /// Overwrite the cells of `range` with `rows`.
    async fn update_cells(&self, range: &SheetRange, rows: Vec<Vec<String>>) -> Result<()>;
}
