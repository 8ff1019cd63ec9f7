//! Invox Store - Atomic invoice persistence with artifact emission
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - Header and line-item repositories (transaction-scoped writes)
//! - Deterministic JSON artifact emitter with atomic publish
//! - Unit-of-work coordinator gating commit on emission success

pub mod artifact;
pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod uow;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
pub use uow::InvoiceStore;
