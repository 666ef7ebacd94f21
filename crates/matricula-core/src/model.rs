//! Domain records persisted by the enrollment ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A course offering with one or more schedule slots.
///
/// Each schedule is an opaque date/time label (e.g. `"2024-03-01 09:00"`).
/// Slots are dedup-checked independently per registrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name as it appears in the catalog sheet.
    pub name: String,
    /// Schedule slots the registrant selected, in catalog order.
    #[serde(default)]
    pub schedules: Vec<String>,
}

impl Course {
    /// Create a course with a single schedule slot.
    pub fn single<N, S>(name: N, schedule: S) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            schedules: vec![schedule.into()],
        }
    }
}

/// A registration record as persisted in one ledger row.
///
/// The `(id_document, schedule)` pair is the business key for duplicate
/// detection; one row is written per selected schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Course the person enrolled in, with the selected schedules.
    pub course: Course,
    /// Full name of the registrant.
    #[serde(default)]
    pub full_name: String,
    /// Identity document (RG). Required before a save is attempted.
    #[serde(default)]
    pub id_document: String,
    /// Birth date; absent when the stored cell was empty.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Age in years; zero when the stored cell was empty.
    #[serde(default)]
    pub age: u32,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact e-mail; confirmation messages are sent here.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Free-form confirmation status cell (e.g. "yes").
    #[serde(default)]
    pub confirmation_status: String,
}

impl Person {
    /// Checks the preconditions for writing this record to the ledger.
    ///
    /// Requires a non-empty id document, a non-empty course name, and at
    /// least one non-empty schedule slot. Performs no I/O.
    pub fn validate_for_registration(&self) -> crate::Result<()> {
        if self.id_document.trim().is_empty() {
            return Err(crate::Error::invalid_field(
                "id_document",
                "must not be empty",
            ));
        }
        if self.course.name.trim().is_empty() {
            return Err(crate::Error::invalid_field(
                "course.name",
                "must not be empty",
            ));
        }
        if !self
            .course
            .schedules
            .iter()
            .any(|slot| !slot.trim().is_empty())
        {
            return Err(crate::Error::invalid_field(
                "course.schedules",
                "at least one schedule must be selected",
            ));
        }
        Ok(())
    }

    /// Schedule slots that take part in registration, skipping blank
    /// entries.
    pub fn selected_schedules(&self) -> impl Iterator<Item = &str> {
        self.course
            .schedules
            .iter()
            .map(String::as_str)
            .filter(|slot| !slot.trim().is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    fn valid_person() -> Person {
        Person {
            course: Course::single("Excel Basics", "2024-03-01 09:00"),
            full_name: "Ana Silva".to_string(),
            id_document: "12.345.678-9".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
            age: 34,
            address: "Rua A".to_string(),
            email: "ana@x.com".to_string(),
            phone: "11999999999".to_string(),
            confirmation_status: "yes".to_string(),
        }
    }

    #[test]
    fn test_valid_person_passes_validation() {
        assert!(valid_person().validate_for_registration().is_ok());
    }

    #[test]
    fn test_blank_id_document_is_rejected() {
        let mut person = valid_person();
        person.id_document = "   ".to_string();
        let err = person.validate_for_registration().unwrap_err();
        let Error::InvalidRecord { field, .. } = err else {
            unreachable!("expected InvalidRecord");
        };
        assert_eq!(field.as_deref(), Some("id_document"));
    }

    #[test]
    fn test_blank_course_name_is_rejected() {
        let mut person = valid_person();
        person.course.name = String::new();
        assert!(person.validate_for_registration().is_err());
    }

    #[test]
    fn test_empty_schedule_list_is_rejected() {
        let mut person = valid_person();
        person.course.schedules.clear();
        assert!(person.validate_for_registration().is_err());
    }

    #[test]
    fn test_all_blank_schedules_are_rejected() {
        let mut person = valid_person();
        person.course.schedules = vec!["".to_string(), "  ".to_string()];
        assert!(person.validate_for_registration().is_err());
    }

    #[test]
    fn test_selected_schedules_skips_blanks() {
        let mut person = valid_person();
        person.course.schedules = vec![
            "2024-03-01 09:00".to_string(),
            String::new(),
            "2024-03-02 14:00".to_string(),
        ];
        let selected: Vec<_> = person.selected_schedules().collect();
        assert_eq!(selected, vec!["2024-03-01 09:00", "2024-03-02 14:00"]);
    }

    #[test]
    fn test_person_json_round_trip() {
        let person = valid_person();
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }

    #[test]
    fn test_person_deserializes_with_missing_optionals() {
        let json = r#"{"course":{"name":"Excel Basics","schedules":["2024-03-01 09:00"]},"id_document":"12.345.678-9"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.age, 0);
        assert!(person.birth_date.is_none());
        assert!(person.full_name.is_empty());
        assert!(person.validate_for_registration().is_ok());
    }
}
