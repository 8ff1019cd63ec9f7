use thiserror::Error;

/// Result type alias using InvoxError
pub type Result<T> = std::result::Result<T, InvoxError>;

/// Canonical error taxonomy for invoice persistence
///
/// Each variant maps to a stable error code that can be used for
/// programmatic error handling and test assertions. Expected failure
/// classes (validation, persistence, emission) are always converted into
/// entries on the returned [`crate::Outcome`] rather than raised; only
/// `Internal` marks an unexpected programming error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvoxError {
    /// A field exceeded a size or type constraint before reaching the store
    #[error("Validation failed for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A header or line write reported zero affected rows, or the store failed
    #[error("Persistence failed in operation '{op}': {message}")]
    Persistence { op: String, message: String },

    /// The artifact write failed
    #[error("Artifact emission failed for '{path}': {message}")]
    Emission { path: String, message: String },

    /// The artifact write did not complete within the bounded wait
    #[error("Artifact emission timed out for '{path}' after {waited_ms}ms")]
    EmissionTimeout { path: String, waited_ms: u64 },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem error outside the emission path
    #[error("IO error in operation '{op}': {message}")]
    Io { op: String, message: String },

    /// Generic internal error (invalid internal state)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl InvoxError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            InvoxError::Validation { .. } => "ERR_VALIDATION",
            InvoxError::Persistence { .. } => "ERR_PERSISTENCE",
            InvoxError::Emission { .. } => "ERR_EMISSION",
            InvoxError::EmissionTimeout { .. } => "ERR_EMISSION_TIMEOUT",
            InvoxError::Serialization { .. } => "ERR_SERIALIZATION",
            InvoxError::Io { .. } => "ERR_IO",
            InvoxError::Internal { .. } => "ERR_INTERNAL",
        }
    }

    /// True for the failure classes the commit gate treats as emission failure
    pub fn is_emission_failure(&self) -> bool {
        matches!(
            self,
            InvoxError::Emission { .. } | InvoxError::EmissionTimeout { .. }
        )
    }
}

/// Conversion from serde_json::Error to InvoxError
impl From<serde_json::Error> for InvoxError {
    fn from(err: serde_json::Error) -> Self {
        InvoxError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (
                InvoxError::Validation {
                    field: "customer_name".to_string(),
                    reason: "too long".to_string(),
                },
                "ERR_VALIDATION",
            ),
            (
                InvoxError::Persistence {
                    op: "header_insert".to_string(),
                    message: "zero rows affected".to_string(),
                },
                "ERR_PERSISTENCE",
            ),
            (
                InvoxError::Emission {
                    path: "/out/invoice-1.json".to_string(),
                    message: "permission denied".to_string(),
                },
                "ERR_EMISSION",
            ),
            (
                InvoxError::EmissionTimeout {
                    path: "/out/invoice-1.json".to_string(),
                    waited_ms: 5000,
                },
                "ERR_EMISSION_TIMEOUT",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_timeout_counts_as_emission_failure() {
        let timeout = InvoxError::EmissionTimeout {
            path: "x".to_string(),
            waited_ms: 100,
        };
        let emission = InvoxError::Emission {
            path: "x".to_string(),
            message: "disk full".to_string(),
        };
        let persistence = InvoxError::Persistence {
            op: "header_insert".to_string(),
            message: "boom".to_string(),
        };

        assert!(timeout.is_emission_failure());
        assert!(emission.is_emission_failure());
        assert!(!persistence.is_emission_failure());
    }
}
