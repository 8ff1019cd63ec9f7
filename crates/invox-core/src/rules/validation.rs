use crate::errors::InvoxError;
use crate::model::{Invoice, InvoiceItem, TEXT_FIELD_MAX};

/// Validate an invoice aggregate before it reaches the store
///
/// Checks the field-size contract (50-char bound on name and region fields,
/// mirrored on item text fields) and item quantity sanity. Exceeding a bound
/// is a ValidationFailure, distinct from any PersistenceFailure the store may
/// later report.
///
/// Returns all violations found, in field order, so the caller can surface
/// every problem at once rather than one per attempt.
pub fn validate_invoice(invoice: &Invoice) -> Vec<InvoxError> {
    let mut errors = Vec::new();

    check_text_bound(&mut errors, "customer_name", &invoice.customer_name);
    check_text_bound(
        &mut errors,
        "destination_region",
        &invoice.destination_region,
    );
    check_text_bound(&mut errors, "origin_region", &invoice.origin_region);

    for (index, item) in invoice.items.iter().enumerate() {
        validate_item(&mut errors, index, item);
    }

    errors
}

fn validate_item(errors: &mut Vec<InvoxError>, index: usize, item: &InvoiceItem) {
    check_text_bound(
        errors,
        &format!("items[{}].product_code", index),
        &item.product_code,
    );
    check_text_bound(
        errors,
        &format!("items[{}].product_name", index),
        &item.product_name,
    );

    if item.quantity < 0 {
        errors.push(InvoxError::Validation {
            field: format!("items[{}].quantity", index),
            reason: format!("must be non-negative, got {}", item.quantity),
        });
    }
}

/// Character-count bound check shared by all text fields
fn check_text_bound(errors: &mut Vec<InvoxError>, field: &str, value: &str) {
    let len = value.chars().count();
    if len > TEXT_FIELD_MAX {
        errors.push(InvoxError::Validation {
            field: field.to_string(),
            reason: format!("exceeds {} characters (got {})", TEXT_FIELD_MAX, len),
        });
    }
}
