use serde::{Deserialize, Serialize};

/// InvoiceItem - child record belonging to exactly one Invoice
///
/// `invoice_id` is 0 until the parent header is persisted; the coordinator
/// tags items with the generated identifier before writing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Identifier of the owning Invoice (0 until the parent is persisted)
    pub invoice_id: i64,

    /// Product code (max 50 chars)
    pub product_code: String,

    /// Product name (max 50 chars)
    pub product_name: String,

    /// Quantity of the product (non-negative)
    pub quantity: i64,
}

impl InvoiceItem {
    /// Create a new item not yet tagged with a parent identifier
    pub fn new(
        product_code: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            invoice_id: 0,
            product_code: product_code.into(),
            product_name: product_name.into(),
            quantity,
        }
    }
}
