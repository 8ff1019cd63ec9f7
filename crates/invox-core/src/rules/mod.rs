//! Validation rules
//!
//! Pre-store field-bound checks applied before any persistence is attempted.

pub mod validation;
