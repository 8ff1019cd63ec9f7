//! Shared fixtures for invox-store integration tests

use invox_core::logging_facility::{self, Profile};
use invox_core::model::{Invoice, InvoiceItem};
use invox_store::{InvoiceStore, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// A store rooted in a temp directory, with its paths exposed for assertions
#[allow(dead_code)]
pub struct TestStore {
    pub store: InvoiceStore,
    pub db_path: PathBuf,
    pub artifact_dir: PathBuf,
    // Held so the directory outlives the test
    _dir: TempDir,
}

#[allow(dead_code)]
pub fn setup_store() -> TestStore {
    logging_facility::init(Profile::Test);
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("invox.db");
    let artifact_dir = dir.path().join("artifacts");
    let store = InvoiceStore::open(StoreConfig::new(&db_path, &artifact_dir)).unwrap();

    TestStore {
        store,
        db_path,
        artifact_dir,
        _dir: dir,
    }
}

/// Build an invoice with `item_count` distinct items
#[allow(dead_code)]
pub fn invoice_with_items(number: i64, series: i64, item_count: usize) -> Invoice {
    let mut invoice = Invoice::new(number, series, "Acme", "SP", "RJ");
    for i in 0..item_count {
        invoice.add_item(InvoiceItem::new(
            format!("P-{:02}", i),
            format!("Product {}", i),
            (i + 1) as i64,
        ));
    }
    invoice
}

/// Count all rows in a table
#[allow(dead_code)]
pub fn count_rows(db_path: &std::path::Path, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(&format!("SELECT count(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

/// Look up a header id by business key, None when no row exists
#[allow(dead_code)]
pub fn find_header(db_path: &std::path::Path, number: i64, series: i64) -> Option<i64> {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(
        "SELECT id FROM invoices WHERE number = ?1 AND series = ?2",
        rusqlite::params![number, series],
        |row| row.get(0),
    )
    .ok()
}
