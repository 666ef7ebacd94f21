//! # matricula-ledger
//!
//! The append/lookup/dedup engine of the Matricula enrollment service.
//!
//! This crate treats a remote spreadsheet as an append-only record store:
//! - [`codec`] — marshaling between grid rows and [`matricula_core::Person`]
//! - [`RegistrationLedger`] — row allocation, duplicate prevention,
//!   two-phase save (persist, then notify)
//! - [`CourseCatalog`] — the course list and the narrow time update
//!
//! All grid access goes through [`matricula_grid::GridClient`], so every
//! operation here can be exercised against the in-memory grid.

pub mod codec;
pub mod courses;
pub mod ledger;

pub use courses::CourseCatalog;
pub use ledger::RegistrationLedger;
