//! Domain models
//!
//! Invoice aggregate root and its line items. The aggregate is
//! caller-constructed and short-lived; the unit-of-work coordinator is the
//! only writer of `Invoice.id`.

mod invoice;
mod item;

pub use invoice::Invoice;
pub use item::InvoiceItem;

/// Maximum length of text fields persisted as VARCHAR(50) equivalents
pub const TEXT_FIELD_MAX: usize = 50;
