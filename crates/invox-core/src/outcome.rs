//! Per-call outcome value
//!
//! Replaces shared mutable error-list state with an explicit value object
//! assembled by the unit-of-work coordinator and returned to the caller.

use crate::errors::InvoxError;

/// Result of one unit-of-work execution
///
/// Contract:
/// - `committed == true` implies `errors` is empty and the header row, all
///   line rows, and the artifact exist.
/// - `committed == false` implies none of those effects are externally
///   observable afterward, and the caller must treat the document id as not
///   durably assigned even if it was transiently set during the attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Whether the transactional boundary was finalized
    pub committed: bool,

    /// Typed failure descriptions accumulated during the attempt
    pub errors: Vec<InvoxError>,
}

impl Outcome {
    /// Successful outcome: boundary committed, no errors
    pub fn committed() -> Self {
        Self {
            committed: true,
            errors: Vec::new(),
        }
    }

    /// Failed outcome with a single error
    pub fn failed(error: InvoxError) -> Self {
        Self {
            committed: false,
            errors: vec![error],
        }
    }

    /// Failed outcome with accumulated errors
    pub fn failed_with(errors: Vec<InvoxError>) -> Self {
        Self {
            committed: false,
            errors,
        }
    }

    /// Check whether this outcome represents a committed unit of work
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Stable code of the first recorded error, if any
    pub fn first_code(&self) -> Option<&'static str> {
        self.errors.first().map(InvoxError::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_outcome_has_no_errors() {
        let outcome = Outcome::committed();
        assert!(outcome.is_committed());
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.first_code(), None);
    }

    #[test]
    fn test_failed_outcome_carries_error_code() {
        let outcome = Outcome::failed(InvoxError::Persistence {
            op: "header_insert".to_string(),
            message: "zero rows affected".to_string(),
        });
        assert!(!outcome.is_committed());
        assert_eq!(outcome.first_code(), Some("ERR_PERSISTENCE"));
    }

    #[test]
    fn test_failed_with_preserves_error_order() {
        let outcome = Outcome::failed_with(vec![
            InvoxError::Validation {
                field: "customer_name".to_string(),
                reason: "too long".to_string(),
            },
            InvoxError::Validation {
                field: "origin_region".to_string(),
                reason: "too long".to_string(),
            },
        ]);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.first_code(), Some("ERR_VALIDATION"));
    }
}
