//! Store configuration
//!
//! Supplied by the caller; there is no CLI or environment surface here.

use std::path::PathBuf;
use std::time::Duration;

/// Default bound on how long one artifact emission may take.
const DEFAULT_EMIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for an [`crate::InvoiceStore`]
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the SQLite database file
    pub db_path: PathBuf,

    /// Directory receiving one artifact per committed invoice
    pub artifact_dir: PathBuf,

    /// Bounded wait for artifact emission; expiry aborts and rolls back
    pub emit_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with the default emission timeout
    pub fn new(db_path: impl Into<PathBuf>, artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            artifact_dir: artifact_dir.into(),
            emit_timeout: DEFAULT_EMIT_TIMEOUT,
        }
    }

    /// Set the emission timeout
    #[must_use]
    pub fn with_emit_timeout(mut self, timeout: Duration) -> Self {
        self.emit_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = StoreConfig::new("/tmp/test.db", "/tmp/artifacts");
        assert_eq!(config.emit_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_with_emit_timeout() {
        let config = StoreConfig::new("/tmp/test.db", "/tmp/artifacts")
            .with_emit_timeout(Duration::from_millis(250));
        assert_eq!(config.emit_timeout, Duration::from_millis(250));
    }
}
