//! Invox Core - Domain models and outcome contract for invoice persistence
//!
//! This crate provides the foundational pieces shared by the persistence
//! layer, including:
//! - Invoice and InvoiceItem aggregate models
//! - Field-bound validation rules (pre-store)
//! - Canonical error taxonomy with stable error codes
//! - Per-call Outcome value collecting typed failures
//! - Logging facility initialization

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod outcome;
pub mod rules;

// Re-export commonly used types
pub use errors::{InvoxError, Result};
pub use model::{Invoice, InvoiceItem};
pub use outcome::Outcome;
