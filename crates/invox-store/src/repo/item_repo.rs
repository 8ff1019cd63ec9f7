//! Line-item repository
//!
//! Persists child rows tagged with the parent identifier, in submission
//! order. Ordering has no storage-level meaning but matters for
//! diagnosability and for round-trip testing against the artifact.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, persistence_error, Result};
use invox_core::model::InvoiceItem;
use rusqlite::{Connection, Transaction};

/// SQLite repository for invoice line items
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a single line item within a transaction
    ///
    /// The `position` column records submission order so reads can restore it.
    pub fn insert_tx(
        tx: &Transaction,
        item: &InvoiceItem,
        invoice_id: i64,
        position: usize,
    ) -> Result<()> {
        let rows_affected = tx
            .execute(
                "INSERT INTO invoice_items (invoice_id, position, product_code, product_name, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    invoice_id,
                    position as i64,
                    item.product_code,
                    item.product_name,
                    item.quantity,
                ],
            )
            .map_err(|e| from_rusqlite("item_insert", e))?;

        if rows_affected == 0 {
            return Err(persistence_error(
                "item_insert",
                format!("zero rows affected writing item at position {}", position),
            ));
        }

        Ok(())
    }

    /// Insert all line items for an invoice, preserving submission order
    ///
    /// Returns one result per item, in the same order as the input.
    pub fn insert_all_tx(
        tx: &Transaction,
        items: &[InvoiceItem],
        invoice_id: i64,
    ) -> Vec<Result<()>> {
        items
            .iter()
            .enumerate()
            .map(|(position, item)| Self::insert_tx(tx, item, invoice_id, position))
            .collect()
    }

    /// List all items for an invoice in original submission order
    pub fn list_for_invoice(conn: &Connection, invoice_id: i64) -> Result<Vec<InvoiceItem>> {
        let mut stmt = conn
            .prepare(
                "SELECT invoice_id, product_code, product_name, quantity
                 FROM invoice_items
                 WHERE invoice_id = ?1
                 ORDER BY position",
            )
            .map_err(|e| from_rusqlite("item_list", e))?;

        let items = stmt
            .query_map([invoice_id], |row| {
                let invoice_id: i64 = row.get(0)?;
                let product_code: String = row.get(1)?;
                let product_name: String = row.get(2)?;
                let quantity: i64 = row.get(3)?;

                let mut item = InvoiceItem::new(product_code, product_name, quantity);
                item.invoice_id = invoice_id;

                Ok(item)
            })
            .map_err(|e| from_rusqlite("item_list", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("item_list", e))?;

        Ok(items)
    }
}
