//! # matricula-api
//!
//! Thin HTTP surface over the enrollment ledger.
//!
//! Routes:
//! - `POST /person` — register (201; 409 duplicate; 422 invalid)
//! - `GET /person/{id_document}` — lookup (404 on miss)
//! - `GET /courses` — course catalog
//! - `PUT /courses/update-time` — course time update (404 unknown course)
//! - `GET /healthz` — liveness
//!
//! All business rules live in `matricula-ledger`; this crate only
//! translates between HTTP and the ledger's contract.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use matricula_ledger::{CourseCatalog, RegistrationLedger};

/// Shared handler state: the ledger and the course catalog.
#[derive(Clone)]
pub struct AppState {
    /// Registration engine.
    pub ledger: Arc<RegistrationLedger>,
    /// Course catalog.
    pub catalog: Arc<CourseCatalog>,
}

/// Builds the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/person", post(routes::register))
        .route("/person/{id_document}", get(routes::find_person))
        .route("/courses", get(routes::list_courses))
        .route("/courses/update-time", put(routes::update_course_time))
        .route("/healthz", get(routes::healthz))
        .with_state(state)
}
