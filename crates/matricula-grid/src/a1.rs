//! A1-notation range types.
//!
//! The remote grid addresses cells by sheet title plus an A1 range such
//! as `A2:J`, `D2:D`, or `B5:C5`. [`CellRange`] models the range part in
//! typed form (0-based columns, 1-based rows) and [`SheetRange`] pairs it
//! with a sheet title, rendering the quoted form the Sheets API expects.

use std::fmt;
use std::str::FromStr;

use matricula_core::{Error, Result};

/// Renders a 0-based column index as its letter label (0 → `A`, 25 → `Z`,
/// 26 → `AA`).
pub fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label
}

/// Parses a column letter label back to its 0-based index. Returns `None`
/// for empty or non-alphabetic input.
pub fn column_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for ch in label.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        index = index * 26 + (ch as usize - 'A' as usize + 1);
    }
    Some(index - 1)
}

/// A rectangular cell range in A1 notation.
///
/// Columns are 0-based indices; rows are 1-based as in the grid UI.
/// `end_row: None` makes the range open-ended downward (`A2:J`), which is
/// how the ledger reads "all data rows".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    /// First column of the range.
    pub start_col: usize,
    /// First row of the range (1-based).
    pub start_row: usize,
    /// Last column, inclusive. `None` for a single-cell range.
    pub end_col: Option<usize>,
    /// Last row, inclusive. `None` leaves the range open-ended downward.
    pub end_row: Option<usize>,
}

impl CellRange {
    /// A single cell, e.g. `B5`.
    pub fn cell(col: usize, row: usize) -> Self {
        Self {
            start_col: col,
            start_row: row,
            end_col: None,
            end_row: None,
        }
    }

    /// A bounded rectangle, e.g. `A5:J5`.
    pub fn bounded(start_col: usize, start_row: usize, end_col: usize, end_row: usize) -> Self {
        Self {
            start_col,
            start_row,
            end_col: Some(end_col),
            end_row: Some(end_row),
        }
    }

    /// Columns `start_col..=end_col` from `start_row` to the end of the
    /// data, e.g. `A2:J`.
    pub fn open(start_col: usize, start_row: usize, end_col: usize) -> Self {
        Self {
            start_col,
            start_row,
            end_col: Some(end_col),
            end_row: None,
        }
    }

    /// A single column from `start_row` downward, e.g. `D2:D`.
    pub fn column(col: usize, start_row: usize) -> Self {
        Self::open(col, start_row, col)
    }

    /// Number of columns the range spans, when bounded on the right.
    pub fn width(&self) -> usize {
        self.end_col.unwrap_or(self.start_col) - self.start_col + 1
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.start_col), self.start_row)?;
        match (self.end_col, self.end_row) {
            (None, None) => Ok(()),
            (Some(col), None) => write!(f, ":{}", column_label(col)),
            (Some(col), Some(row)) => write!(f, ":{}{row}", column_label(col)),
            // End row without an end column never arises from the
            // constructors; render it against the start column.
            (None, Some(row)) => write!(f, ":{}{row}", column_label(self.start_col)),
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        fn split_part(part: &str) -> Result<(usize, Option<usize>)> {
            let letters: String = part.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
            let digits = &part[letters.len()..];
            let col = column_index(&letters)
                .ok_or_else(|| Error::invalid(format!("bad column in range part '{part}'")))?;
            let row = if digits.is_empty() {
                None
            } else {
                Some(
                    digits
                        .parse::<usize>()
                        .map_err(|_| Error::invalid(format!("bad row in range part '{part}'")))?,
                )
            };
            Ok((col, row))
        }

        let mut parts = s.split(':');
        let start = parts
            .next()
            .ok_or_else(|| Error::invalid("empty range"))?;
        let (start_col, start_row) = split_part(start)?;
        let start_row =
            start_row.ok_or_else(|| Error::invalid(format!("range '{s}' missing start row")))?;

        let end = parts.next();
        if parts.next().is_some() {
            return Err(Error::invalid(format!("range '{s}' has too many parts")));
        }
        match end {
            None => Ok(Self::cell(start_col, start_row)),
            Some(end) => {
                let (end_col, end_row) = split_part(end)?;
                Ok(Self {
                    start_col,
                    start_row,
                    end_col: Some(end_col),
                    end_row,
                })
            }
        }
    }
}

/// A cell range on a named sheet.
///
/// Displays as the Sheets API expects: the title is single-quoted when it
/// contains anything beyond ASCII alphanumerics and underscores, with
/// embedded quotes doubled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    /// Sheet (tab) title.
    pub sheet: String,
    /// Range within the sheet.
    pub cells: CellRange,
}

impl SheetRange {
    /// Pairs a sheet title with a cell range.
    pub fn new<S: Into<String>>(sheet: S, cells: CellRange) -> Self {
        Self {
            sheet: sheet.into(),
            cells,
        }
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = !self.sheet.is_empty()
            && self
                .sheet
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if plain {
            write!(f, "{}!{}", self.sheet, self.cells)
        } else {
            write!(f, "'{}'!{}", self.sheet.replace('\'', "''"), self.cells)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label_round_trip() {
        for (index, label) in [(0, "A"), (3, "D"), (9, "J"), (25, "Z"), (26, "AA"), (27, "AB"), (51, "AZ"), (52, "BA")] {
            assert_eq!(column_label(index), label);
            assert_eq!(column_index(label), Some(index));
        }
    }

    #[test]
    fn test_column_index_rejects_garbage() {
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
        assert_eq!(column_index("-"), None);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(CellRange::open(0, 2, 9).to_string(), "A2:J");
        assert_eq!(CellRange::column(3, 2).to_string(), "D2:D");
        assert_eq!(CellRange::bounded(0, 5, 9, 5).to_string(), "A5:J5");
        assert_eq!(CellRange::bounded(1, 4, 2, 4).to_string(), "B4:C4");
        assert_eq!(CellRange::cell(0, 1).to_string(), "A1");
    }

    #[test]
    fn test_range_parse() {
        assert_eq!("A2:J".parse::<CellRange>().unwrap(), CellRange::open(0, 2, 9));
        assert_eq!("D2:D".parse::<CellRange>().unwrap(), CellRange::column(3, 2));
        assert_eq!(
            "B4:C4".parse::<CellRange>().unwrap(),
            CellRange::bounded(1, 4, 2, 4)
        );
        assert_eq!("AA10".parse::<CellRange>().unwrap(), CellRange::cell(26, 10));
    }

    #[test]
    fn test_range_parse_rejects_garbage() {
        assert!("".parse::<CellRange>().is_err());
        assert!("2:J".parse::<CellRange>().is_err());
        assert!("A:J".parse::<CellRange>().is_err());
        assert!("A2:J:K".parse::<CellRange>().is_err());
    }

    #[test]
    fn test_width() {
        assert_eq!(CellRange::open(0, 2, 9).width(), 10);
        assert_eq!(CellRange::column(3, 2).width(), 1);
        assert_eq!(CellRange::cell(4, 2).width(), 1);
    }

    #[test]
    fn test_sheet_range_display_plain_title() {
        let range = SheetRange::new("Courses", CellRange::open(0, 2, 25));
        assert_eq!(range.to_string(), "Courses!A2:Z");
    }

    #[test]
    fn test_sheet_range_display_quotes_spaces() {
        let range = SheetRange::new("Course Registrations", CellRange::open(0, 2, 9));
        assert_eq!(range.to_string(), "'Course Registrations'!A2:J");
    }

    #[test]
    fn test_sheet_range_display_escapes_quotes() {
        let range = SheetRange::new("Ana's Sheet", CellRange::cell(0, 1));
        assert_eq!(range.to_string(), "'Ana''s Sheet'!A1");
    }
}
