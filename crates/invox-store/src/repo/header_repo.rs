//! Invoice header repository
//!
//! Persists the invoice header within an explicit transaction and returns
//! the store-generated identifier in the same round trip.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, persistence_error, Result};
use invox_core::model::Invoice;
use rusqlite::{Connection, OptionalExtension, Transaction};

use super::item_repo::ItemRepo;

/// SQLite repository for invoice headers
pub struct HeaderRepo;

impl HeaderRepo {
    /// Insert the invoice header within a transaction
    ///
    /// Returns the generated identifier. Zero affected rows is always
    /// treated as definite failure, never partial success.
    pub fn insert_tx(tx: &Transaction, invoice: &Invoice) -> Result<i64> {
        let rows_affected = tx
            .execute(
                "INSERT INTO invoices (number, series, customer_name, destination_region, origin_region, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    invoice.number,
                    invoice.series,
                    invoice.customer_name,
                    invoice.destination_region,
                    invoice.origin_region,
                    invoice.created_at.timestamp(),
                ],
            )
            .map_err(|e| from_rusqlite("header_insert", e))?;

        if rows_affected == 0 {
            return Err(persistence_error(
                "header_insert",
                "zero rows affected writing invoice header",
            ));
        }

        Ok(tx.last_insert_rowid())
    }

    /// Look up a committed header id by its business key
    ///
    /// Returns None when no row exists, which is how tests observe that a
    /// rolled-back unit of work left nothing behind.
    pub fn find_by_number_series(
        conn: &Connection,
        number: i64,
        series: i64,
    ) -> Result<Option<i64>> {
        conn.query_row(
            "SELECT id FROM invoices WHERE number = ?1 AND series = ?2",
            rusqlite::params![number, series],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite("header_find", e))
    }

    /// Get a persisted invoice with its items by identifier
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Invoice>> {
        let header = conn
            .query_row(
                "SELECT id, number, series, customer_name, destination_region, origin_region, created_at
                 FROM invoices
                 WHERE id = ?1",
                [id],
                |row| {
                    let id: i64 = row.get(0)?;
                    let number: i64 = row.get(1)?;
                    let series: i64 = row.get(2)?;
                    let customer_name: String = row.get(3)?;
                    let destination_region: String = row.get(4)?;
                    let origin_region: String = row.get(5)?;
                    let created_at: i64 = row.get(6)?;

                    let mut invoice = Invoice::new(
                        number,
                        series,
                        customer_name,
                        destination_region,
                        origin_region,
                    );
                    invoice.id = id;
                    invoice.created_at = chrono::DateTime::from_timestamp(created_at, 0)
                        .unwrap_or_else(chrono::Utc::now);

                    Ok(invoice)
                },
            )
            .optional()
            .map_err(|e| from_rusqlite("header_get", e))?;

        match header {
            Some(mut invoice) => {
                invoice.items = ItemRepo::list_for_invoice(conn, invoice.id)?;
                Ok(Some(invoice))
            }
            None => Ok(None),
        }
    }
}
