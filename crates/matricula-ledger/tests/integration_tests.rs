//! Integration test suite for the registration ledger.
//!
//! Drives the full register/lookup/dedup flow and the course catalog
//! against the in-memory grid, including the persist-then-notify split.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

mod integration {
    mod courses;
    mod registration;
}
