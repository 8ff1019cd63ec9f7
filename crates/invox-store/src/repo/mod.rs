//! Repository layer
//!
//! Transaction-scoped writes and lookups for invoice headers and line items.

pub mod header_repo;
pub mod item_repo;

pub use header_repo::HeaderRepo;
pub use item_repo::ItemRepo;
