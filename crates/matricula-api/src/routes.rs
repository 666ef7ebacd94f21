//! Request handlers and wire DTOs.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use matricula_core::{Course, Error, Person};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Outcome of a registration request.
///
/// `email_sent: false` means the seat is reserved but the confirmation
/// could not be delivered; the registration itself succeeded.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The row was persisted.
    pub saved: bool,
    /// The confirmation e-mail went out.
    pub email_sent: bool,
}

/// Body of the course-time update request.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    /// Course to update, matched case-insensitively.
    pub course_name: String,
    /// New morning slot (column B).
    pub morning_time: String,
    /// New afternoon slot (column C).
    pub afternoon_time: String,
}

/// `POST /person` — register an enrollee.
pub async fn register(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    match state.ledger.register(&person).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(RegisterResponse {
                saved: true,
                email_sent: true,
            }),
        )),
        // Persisted but unconfirmed: still a created registration.
        Err(err @ Error::Notification { .. }) => {
            tracing::warn!(error = %err, "registration saved but confirmation failed");
            Ok((
                StatusCode::CREATED,
                Json(RegisterResponse {
                    saved: true,
                    email_sent: false,
                }),
            ))
        }
        Err(err) => Err(ApiError(err)),
    }
}

/// `GET /person/{id_document}` — look up a registration.
pub async fn find_person(
    State(state): State<AppState>,
    Path(id_document): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let person = state
        .ledger
        .find_by_id_document(&id_document)
        .await?
        .ok_or_else(|| Error::not_found(format!("person with id document {id_document}")))?;
    Ok(Json(person))
}

/// `GET /courses` — list the catalog.
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state.catalog.list_all().await?;
    Ok(Json(courses))
}

/// `PUT /courses/update-time` — rewrite a course's time cells.
pub async fn update_course_time(
    State(state): State<AppState>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .update_course_times(
            &request.course_name,
            &request.morning_time,
            &request.afternoon_time,
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /healthz` — liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}
