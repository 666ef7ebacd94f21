//! Course catalog over the courses sheet.
//!
//! One row per course: name in column A, schedule slots in the remaining
//! columns. Separate from the registration ledger; the only write here
//! is the narrow two-cell time update.

use std::sync::Arc;

use matricula_core::{Course, Error, Result};
use matricula_grid::{CellRange, GridClient, SheetRange};

/// First data row; row 1 is the header.
const DATA_START_ROW: usize = 2;

/// Widest column scanned for schedule slots (column Z).
const LAST_SCHEDULE_COL: usize = 25;

/// Read/update access to the course catalog sheet.
pub struct CourseCatalog {
    grid: Arc<dyn GridClient>,
    sheet: String,
}

impl CourseCatalog {
    /// Creates a catalog over `sheet`.
    pub fn new<S: Into<String>>(grid: Arc<dyn GridClient>, sheet: S) -> Self {
        Self {
            grid,
            sheet: sheet.into(),
        }
    }

    fn range(&self, cells: CellRange) -> SheetRange {
        SheetRange::new(&self.sheet, cells)
    }

    /// Lists every course on the sheet, in row order.
    ///
    /// An empty or missing range yields an empty list; blank rows are
    /// skipped.
    pub async fn list_all(&self) -> Result<Vec<Course>> {
        let rows = self
            .grid
            .read_range(&self.range(CellRange::open(0, DATA_START_ROW, LAST_SCHEDULE_COL)))
            .await?;

        let courses: Vec<Course> = rows
            .into_iter()
            .filter(|row| !row.is_empty())
            .map(|mut row| {
                let name = row.remove(0);
                Course {
                    name,
                    schedules: row,
                }
            })
            .collect();
        tracing::debug!(sheet = %self.sheet, count = courses.len(), "listed courses");
        Ok(courses)
    }

    /// Rewrites the morning and afternoon time cells (columns B and C) of
    /// the course named `name`.
    ///
    /// The course row is located by exact case-insensitive trimmed name
    /// match in column A. Returns [`Error::NotFound`] when no row matches.
    pub async fn update_course_times(
        &self,
        name: &str,
        morning: &str,
        afternoon: &str,
    ) -> Result<()> {
        let row = self.find_course_row(name).await?.ok_or_else(|| {
            tracing::warn!(course = name, "course time update for unknown course");
            Error::not_found(format!("course '{name}'"))
        })?;

        let target = self.range(CellRange::bounded(1, row, 2, row));
        self.grid
            .update_cells(
                &target,
                vec![vec![morning.to_string(), afternoon.to_string()]],
            )
            .await?;
        tracing::info!(course = name, row, "course times updated");
        Ok(())
    }

    /// 1-based sheet row of the course named `name`, or `None`.
    async fn find_course_row(&self, name: &str) -> Result<Option<usize>> {
        let names = self
            .grid
            .read_range(&self.range(CellRange::column(0, DATA_START_ROW)))
            .await?;
        let wanted = name.trim().to_lowercase();
        for (index, row) in names.iter().enumerate() {
            let current = row.first().map(String::as_str).unwrap_or("");
            if current.trim().to_lowercase() == wanted {
                return Ok(Some(index + DATA_START_ROW));
            }
        }
        Ok(None)
    }
}
