//! Error types shared by every public operation.

use thiserror::Error;

/// Errors raised while validating inputs to the LABS engine.
///
/// All validation happens at the boundary of a public operation, before
/// any energy is computed. Values are never clamped or repaired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabsError {
    /// A spin (or bit-string character) outside the allowed domain.
    #[error("invalid sequence: entry {value} at position {position} is not +1 or -1")]
    InvalidSequence {
        /// Index of the offending entry.
        position: usize,
        /// The offending value, rendered as text.
        value: String,
    },

    /// A size, budget, or index that the engine cannot work with.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LabsError {
    pub(crate) fn invalid_spin(position: usize, value: impl ToString) -> Self {
        LabsError::InvalidSequence {
            position,
            value: value.to_string(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        LabsError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LabsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sequence_names_value() {
        let err = LabsError::invalid_spin(3, 0);
        let msg = err.to_string();
        assert!(msg.contains("position 3"), "{msg}");
        assert!(msg.contains("entry 0"), "{msg}");
    }

    #[test]
    fn test_configuration_message() {
        let err = LabsError::config("batch_size must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "configuration error: batch_size must be at least 1, got 0"
        );
    }
}
