//! Artifact emitter
//!
//! Serializes the fully-identified invoice aggregate to JSON and stages it on
//! a worker thread with a bounded wait, so a hung external write can never
//! stall the unit of work. The artifact only becomes visible when the
//! coordinator promotes the staged file after observing a timely success; a
//! late write therefore cannot surface an artifact for a rolled-back
//! document.

#![allow(clippy::result_large_err)]

use crate::artifact::atomic;
use crate::errors::{emission_error, io_error, Result};
use invox_core::errors::InvoxError;
use invox_core::model::Invoice;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

// Distinguishes staged files across attempts, so a retry never shares a
// temp path with an earlier hung write for the same document
static STAGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Emits one artifact per document into a configured directory
pub struct ArtifactEmitter {
    dir: PathBuf,
    timeout: Duration,
}

/// A staged artifact awaiting the coordinator's publish/discard decision
///
/// The staged file lives at a path unique to the document identifier and to
/// this attempt, so concurrent emissions, and retries overlapping a hung
/// earlier write, never interleave or clobber each other.
#[must_use = "a staged artifact must be published or discarded"]
#[derive(Debug)]
pub struct StagedArtifact {
    temp_path: PathBuf,
    target_path: PathBuf,
}

impl ArtifactEmitter {
    /// Create an emitter writing into the given directory
    pub fn new(dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            dir: dir.into(),
            timeout,
        }
    }

    /// Final artifact path for a document identifier
    pub fn artifact_path(&self, invoice_id: i64) -> PathBuf {
        self.dir.join(format!("invoice-{}.json", invoice_id))
    }

    /// Serialize an invoice to its canonical artifact bytes
    ///
    /// Deterministic: identical document state (same assigned identifiers,
    /// same field values, same item order) always produces identical bytes.
    pub fn serialize(invoice: &Invoice) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(invoice)?)
    }

    /// Stage the artifact for an invoice, bounded by the configured timeout
    ///
    /// Serialization happens up front; only the filesystem write runs on the
    /// worker thread. On success the staged file exists at the temp path and
    /// the caller decides whether to publish it. Timeout expiry is reported
    /// as `EmissionTimeout`; the abandoned worker removes its own staged
    /// file once it notices the coordinator is gone, so failed attempts
    /// leave nothing behind in the artifact directory.
    pub fn stage(&self, invoice: &Invoice) -> Result<StagedArtifact> {
        debug_assert!(invoice.id > 0, "staging requires an identified aggregate");

        let target_path = self.artifact_path(invoice.id);
        let attempt = STAGE_SEQ.fetch_add(1, Ordering::Relaxed);
        let temp_path = self
            .dir
            .join(format!("invoice-{}.{}.json.tmp", invoice.id, attempt));

        let bytes = Self::serialize(invoice)?;

        let (sender, receiver) = mpsc::channel::<Result<()>>();
        let worker_temp = temp_path.clone();
        thread::spawn(move || {
            let outcome = atomic::stage_write(&worker_temp, &bytes);
            if sender.send(outcome).is_err() {
                // Coordinator timed out and dropped the receiver; the
                // staged bytes are orphaned, clean them up here
                let _ = fs::remove_file(&worker_temp);
            }
        });

        match receiver.recv_timeout(self.timeout) {
            Ok(Ok(())) => Ok(StagedArtifact {
                temp_path,
                target_path,
            }),
            Ok(Err(err)) => {
                let _ = fs::remove_file(&temp_path);
                Err(emission_error(&target_path, err.to_string()))
            }
            Err(_) => {
                // Drop the receiver first so a still-running worker takes
                // the cleanup branch, then sweep in case it already sent
                drop(receiver);
                let _ = fs::remove_file(&temp_path);
                Err(InvoxError::EmissionTimeout {
                    path: target_path.display().to_string(),
                    waited_ms: self.timeout.as_millis() as u64,
                })
            }
        }
    }
}

impl StagedArtifact {
    /// Atomically publish the staged artifact at its final path
    ///
    /// A failed promotion removes the staged file, best effort; either way
    /// the temp path does not outlive this call.
    pub fn publish(self) -> Result<PathBuf> {
        if let Err(err) = atomic::promote(&self.temp_path, &self.target_path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(emission_error(&self.target_path, err.to_string()));
        }
        Ok(self.target_path)
    }

    /// Discard the staged file (best effort)
    pub fn discard(self) {
        let _ = fs::remove_file(&self.temp_path);
    }
}

/// Parse an artifact file back into an Invoice
///
/// Supports exact round-trip verification of committed documents.
pub fn read_artifact(path: &Path) -> Result<Invoice> {
    let bytes = fs::read(path).map_err(|e| io_error("read_artifact", e))?;
    Ok(serde_json::from_slice(&bytes)?)
}
