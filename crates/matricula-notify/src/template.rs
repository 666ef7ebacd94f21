//! Confirmation message rendering.

use chrono::{DateTime, Utc};
use matricula_core::Person;

use crate::Confirmation;

/// Renders the enrollment confirmation for `person`.
///
/// The body lists every schedule slot the person selected. `sent_at` is
/// stamped into the footer; callers pass the current time so rendering
/// stays deterministic under test.
pub fn confirmation_for(person: &Person, sent_at: DateTime<Utc>) -> Confirmation {
    let slots = person
        .selected_schedules()
        .map(|slot| format!("<li><strong>{slot}</strong></li>"))
        .collect::<Vec<_>>()
        .join("\n        ");

    let html_body = format!(
        r#"<html>
<body>
    <h2>Enrollment confirmed: <strong>{course}</strong></h2>
    <p>Your selected schedule:</p>
    <ul>
        {slots}
    </ul>
    <p>See you there,<br>The enrollment team</p>
    <i>Sent: {sent}</i>
</body>
</html>"#,
        course = person.course.name,
        sent = sent_at.format("%d/%m/%Y %H:%M"),
    );

    Confirmation {
        recipient: person.email.clone(),
        subject: format!("Enrollment in {} confirmed!", person.course.name),
        html_body,
    }
}
