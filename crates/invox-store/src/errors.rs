//! Error handling for invox-store
//!
//! Wraps invox-core InvoxError with store-specific helpers

use invox_core::errors::InvoxError;

/// Result type alias using InvoxError
pub type Result<T> = std::result::Result<T, InvoxError>;

/// Create a persistence error for a named store operation
pub fn persistence_error(op: &str, message: impl Into<String>) -> InvoxError {
    InvoxError::Persistence {
        op: op.to_string(),
        message: message.into(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> InvoxError {
    InvoxError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> InvoxError {
    InvoxError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create an emission error for an artifact path
pub fn emission_error(path: &std::path::Path, message: impl Into<String>) -> InvoxError {
    InvoxError::Emission {
        path: path.display().to_string(),
        message: message.into(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> InvoxError {
    InvoxError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
}
