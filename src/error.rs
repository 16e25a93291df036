//! Error types for the solver and its collaborators.

use thiserror::Error;

/// Result type alias for solver operations.
pub type TspResult<T> = std::result::Result<T, TspError>;

/// Errors raised by the search core and the I/O collaborators around it.
#[derive(Error, Debug)]
pub enum TspError {
    /// Enumeration is undefined for zero cities.
    #[error("no cities to enumerate")]
    EmptyInput,

    /// Collect-all retention would exceed the configured route budget.
    #[error("collect-all needs {required} routes but the budget is {budget}")]
    ResourceExhaustion {
        /// Routes the search would retain (saturated at `u64::MAX`).
        required: u64,
        /// Configured retention budget.
        budget: u64,
    },

    /// A city failed validation before reaching the search.
    #[error("invalid city {name}: {reason}")]
    InvalidCity {
        /// Name of the offending city.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The search was cancelled before any route was scored.
    #[error("search cancelled before any route was evaluated")]
    Cancelled,

    /// Malformed city file.
    #[error("parse error at line {line}: {cause}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// Description of the failure.
        cause: String,
    },

    /// I/O failure in a collaborator.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(TspError::EmptyInput.to_string(), "no cities to enumerate");
        let e = TspError::ResourceExhaustion {
            required: 362_880,
            budget: 1000,
        };
        assert_eq!(
            e.to_string(),
            "collect-all needs 362880 routes but the budget is 1000"
        );
        let e = TspError::Parse {
            line: 9,
            cause: "missing y coordinate".into(),
        };
        assert_eq!(e.to_string(), "parse error at line 9: missing y coordinate");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: TspError = io.into();
        assert!(matches!(e, TspError::Io(_)));
    }
}
