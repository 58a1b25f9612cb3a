use thiserror::Error;

/// Errors returned by the clustering engine and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Input collection is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The anomalous-pattern refinement loop hit its iteration cap.
    #[error("clustering did not converge after {iterations} iterations")]
    NotConverged {
        /// Number of refinement rounds attempted.
        iterations: usize,
    },

    /// The same point occurs more than once in the input.
    #[error("duplicate point at index {index}")]
    DuplicatePoint {
        /// Position of the second occurrence.
        index: usize,
    },

    /// Reading a corpus failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
