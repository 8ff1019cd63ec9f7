//! Unit-of-work coordinator
//!
//! Sequences header write → line-item writes → artifact emission and owns
//! the commit/rollback decision. The relational writes are speculative,
//! made on an explicit transaction handle; the emission attempt happens
//! outside that handle; and the explicit commit is gated on emission
//! success. Either all relational rows and the artifact exist afterwards,
//! or none do.

#![allow(clippy::result_large_err)]

use crate::artifact::ArtifactEmitter;
use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations;
use crate::repo::{HeaderRepo, ItemRepo};
use invox_core::model::Invoice;
use invox_core::outcome::Outcome;
use invox_core::rules::validation;
use std::fs;

/// Coordinates one atomic unit of work per [`InvoiceStore::execute`] call
///
/// Each call opens its own connection and transaction, scoped to that call
/// only, so concurrent executions for different documents never share state
/// and identifier generation stays collision-free under the store's
/// isolation guarantees.
pub struct InvoiceStore {
    config: StoreConfig,
}

impl InvoiceStore {
    /// Open the store, applying any pending migrations
    pub fn open(config: StoreConfig) -> Result<Self> {
        let mut conn = db::open(&config.db_path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;

        Ok(Self { config })
    }

    /// Persist an invoice and emit its artifact as one atomic unit of work
    ///
    /// Assigns `invoice.id` as a side effect of a successful header write;
    /// on any failure the id is reset to 0 because nothing durable exists.
    /// Never raises for expected failure classes: validation, persistence,
    /// and emission failures all come back as typed entries on the returned
    /// [`Outcome`].
    pub fn execute(&self, invoice: &mut Invoice) -> Outcome {
        // Field bounds are checked before any store contact
        let violations = validation::validate_invoice(invoice);
        if !violations.is_empty() {
            tracing::warn!(
                number = invoice.number,
                series = invoice.series,
                count = violations.len(),
                "invoice rejected by validation"
            );
            return Outcome::failed_with(violations);
        }

        match self.run(invoice) {
            Ok(()) => Outcome::committed(),
            Err(err) => {
                // Nothing durable exists; the transiently assigned id must
                // not leak to the caller as if it were real
                invoice.id = 0;
                for item in &mut invoice.items {
                    item.invoice_id = 0;
                }
                tracing::warn!(
                    number = invoice.number,
                    series = invoice.series,
                    code = err.code(),
                    "unit of work rolled back"
                );
                Outcome::failed(err)
            }
        }
    }

    /// The three-phase body: speculative writes, emission, gated commit
    fn run(&self, invoice: &mut Invoice) -> Result<()> {
        let mut conn = db::open(&self.config.db_path)?;
        db::configure(&conn)?;
        self.run_on(&mut conn, invoice)
    }

    /// Run the unit of work on an already-opened connection
    ///
    /// Dropping the transaction on any early return rolls back everything
    /// written in this call.
    fn run_on(&self, conn: &mut rusqlite::Connection, invoice: &mut Invoice) -> Result<()> {
        let tx = conn
            .transaction()
            .map_err(|e| from_rusqlite("begin", e))?;

        // Phase 1a: header write; zero affected rows aborts before any
        // line-item write is attempted
        let id = HeaderRepo::insert_tx(&tx, invoice)?;
        invoice.id = id;
        tracing::debug!(invoice_id = id, "invoice header written");

        // Phase 1b: line items tagged with the generated identifier, in
        // submission order. Policy: abort the whole document on the first
        // item failure.
        for item in &mut invoice.items {
            item.invoice_id = id;
        }
        for result in ItemRepo::insert_all_tx(&tx, &invoice.items, id) {
            result?;
        }
        tracing::debug!(invoice_id = id, items = invoice.items.len(), "line items written");

        // Phase 2: emission attempt, outside the transaction handle,
        // bounded by the configured timeout
        let emitter = ArtifactEmitter::new(&self.config.artifact_dir, self.config.emit_timeout);
        let staged = emitter.stage(invoice)?;

        // Phase 3: commit gate. Publish the artifact, then finalize the
        // boundary. If the commit itself fails, remove the just-published
        // artifact so neither store keeps an orphan.
        let artifact_path = staged.publish()?;
        if let Err(err) = tx.commit() {
            let _ = fs::remove_file(&artifact_path);
            return Err(from_rusqlite("commit", err));
        }

        tracing::info!(
            invoice_id = id,
            artifact = %artifact_path.display(),
            "unit of work committed"
        );
        Ok(())
    }
}
