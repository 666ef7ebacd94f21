//! # matricula-core
//!
//! Domain model and error taxonomy for the Matricula enrollment service.
//!
//! This crate carries the types every other Matricula crate agrees on:
//! - [`Course`] and [`Person`] — the records the ledger persists
//! - [`Error`] / [`Result`] — the shared failure taxonomy
//!
//! It deliberately holds no I/O; grid access, notification transport, and
//! the ledger engine live in their own crates.

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Course, Person};
