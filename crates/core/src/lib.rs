//! Domain logic for the back-office: shared types, error taxonomy, and the
//! normalizers used by client onboarding.
//!
//! This crate performs no I/O; everything here is pure and unit-testable.

pub mod dates;
pub mod error;
pub mod phone;
pub mod types;
