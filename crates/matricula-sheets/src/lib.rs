//! # matricula-sheets
//!
//! Google Sheets adapter for the Matricula enrollment service.
//!
//! Implements [`matricula_grid::GridClient`] over the Sheets REST API:
//! - [`SheetsClient`] — range reads, batch writes, cell updates
//! - [`TokenProvider`] — service-account JWT exchange with token caching
//! - [`TokenSource`] / [`StaticToken`] — the auth seam, swappable in tests
//!
//! The ledger never sees this crate directly; it is wired in at service
//! startup as the production grid backend.

pub mod auth;
pub mod client;

pub use auth::{SPREADSHEETS_SCOPE, ServiceAccountKey, StaticToken, TokenProvider, TokenSource};
pub use client::SheetsClient;
