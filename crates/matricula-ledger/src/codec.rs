//! Row codec: typed marshaling between ledger rows and [`Person`].
//!
//! A ledger row is exactly [`ROW_WIDTH`] cells in fixed column order.
//! Decoding tolerates short rows (the remote store omits trailing empty
//! cells): a missing cell is an absent value, never an error. A cell that
//! is present but unparseable is corrupt data and fails with
//! `MalformedRecord`; the two cases are deliberately kept apart.

use chrono::NaiveDate;
use matricula_core::{Course, Error, Person, Result};
use matricula_grid::column_label;

/// Cells per ledger row (columns A through J).
pub const ROW_WIDTH: usize = 10;

/// Column A: course name.
pub const COL_COURSE: usize = 0;
/// Column B: selected schedule slot.
pub const COL_SCHEDULE: usize = 1;
/// Column C: full name.
pub const COL_FULL_NAME: usize = 2;
/// Column D: id document (RG).
pub const COL_ID_DOCUMENT: usize = 3;
/// Column E: birth date, ISO-8601.
pub const COL_BIRTH_DATE: usize = 4;
/// Column F: age, decimal string.
pub const COL_AGE: usize = 5;
/// Column G: address.
pub const COL_ADDRESS: usize = 6;
/// Column H: e-mail.
pub const COL_EMAIL: usize = 7;
/// Column I: phone number.
pub const COL_PHONE: usize = 8;
/// Column J: confirmation status.
pub const COL_CONFIRMED: usize = 9;

/// Cell at `index`, or the empty string when the row is too short.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Decodes one ledger row into a [`Person`].
///
/// Columns beyond the row's length decode to empty strings, age `0`, and
/// an absent birth date. A non-empty birth-date or age cell that fails to
/// parse is reported as [`Error::MalformedRecord`] naming the column.
pub fn decode(row: &[String]) -> Result<Person> {
    let birth_raw = cell(row, COL_BIRTH_DATE).trim();
    let birth_date = if birth_raw.is_empty() {
        None
    } else {
        Some(birth_raw.parse::<NaiveDate>().map_err(|e| {
            Error::malformed(
                column_label(COL_BIRTH_DATE),
                format!("'{birth_raw}' is not an ISO date: {e}"),
            )
        })?)
    };

    let age_raw = cell(row, COL_AGE).trim();
    let age = if age_raw.is_empty() {
        0
    } else {
        age_raw.parse::<u32>().map_err(|_| {
            Error::malformed(
                column_label(COL_AGE),
                format!("'{age_raw}' is not a number"),
            )
        })?
    };

    let schedule = cell(row, COL_SCHEDULE);
    let schedules = if schedule.is_empty() {
        Vec::new()
    } else {
        vec![schedule.to_string()]
    };

    Ok(Person {
        course: Course {
            name: cell(row, COL_COURSE).to_string(),
            schedules,
        },
        full_name: cell(row, COL_FULL_NAME).to_string(),
        id_document: cell(row, COL_ID_DOCUMENT).to_string(),
        birth_date,
        age,
        address: cell(row, COL_ADDRESS).to_string(),
        email: cell(row, COL_EMAIL).to_string(),
        phone: cell(row, COL_PHONE).to_string(),
        confirmation_status: cell(row, COL_CONFIRMED).to_string(),
    })
}

/// Encodes `person` as one ledger row carrying `schedule` in column B.
///
/// Always produces exactly [`ROW_WIDTH`] values; absent optionals encode
/// as empty strings. A [`Person`] with several selected schedules is
/// encoded once per schedule, one row each.
pub fn encode(person: &Person, schedule: &str) -> Vec<String> {
    vec![
        person.course.name.clone(),
        schedule.to_string(),
        person.full_name.clone(),
        person.id_document.clone(),
        person
            .birth_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        person.age.to_string(),
        person.address.clone(),
        person.email.clone(),
        person.phone.clone(),
        person.confirmation_status.clone(),
    ]
}
