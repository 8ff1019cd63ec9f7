use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::InvoiceItem;

/// Invoice - aggregate root representing one business transaction
///
/// An Invoice is a header plus an ordered list of line items. It starts with
/// `id == 0`; the header store assigns the real identifier exactly once
/// during a successful unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-generated identifier (0 until persisted)
    pub id: i64,

    /// Document number within its series
    pub number: i64,

    /// Document series
    pub series: i64,

    /// Customer name (max 50 chars)
    pub customer_name: String,

    /// Destination region code (max 50 chars)
    pub destination_region: String,

    /// Origin region code (max 50 chars)
    pub origin_region: String,

    /// Line items in submission order
    pub items: Vec<InvoiceItem>,

    /// Timestamp when this Invoice was constructed
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new unpersisted Invoice with no items
    pub fn new(
        number: i64,
        series: i64,
        customer_name: impl Into<String>,
        destination_region: impl Into<String>,
        origin_region: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            number,
            series,
            customer_name: customer_name.into(),
            destination_region: destination_region.into(),
            origin_region: origin_region.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a line item, preserving submission order
    pub fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
    }

    /// Check whether this Invoice has been assigned a durable identifier
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invoice_is_unpersisted() {
        let invoice = Invoice::new(100, 1, "Acme", "SP", "RJ");

        assert_eq!(invoice.id, 0);
        assert!(!invoice.is_persisted());
        assert_eq!(invoice.number, 100);
        assert_eq!(invoice.series, 1);
        assert!(invoice.items.is_empty());
    }

    #[test]
    fn test_add_item_preserves_order() {
        let mut invoice = Invoice::new(100, 1, "Acme", "SP", "RJ");
        invoice.add_item(InvoiceItem::new("P-01", "Widget", 2));
        invoice.add_item(InvoiceItem::new("P-02", "Gadget", 1));

        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].product_code, "P-01");
        assert_eq!(invoice.items[1].product_code, "P-02");
    }
}
