//! # matricula-grid
//!
//! The tabular-store seam of the Matricula enrollment service.
//!
//! Provides:
//! - [`GridClient`] — the read/write contract the ledger depends on
//! - [`SheetRange`] / [`CellRange`] — typed A1 addressing
//! - [`MemoryGrid`] — an in-process implementation for tests and local
//!   development
//!
//! The production Google Sheets implementation lives in
//! `matricula-sheets`; the ledger only ever sees this crate's trait.

pub mod a1;
pub mod client;
pub mod memory;

pub use a1::{CellRange, SheetRange, column_index, column_label};
pub use client::{GridClient, RangeWrite};
pub use memory::MemoryGrid;
