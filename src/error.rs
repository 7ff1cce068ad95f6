use thiserror::Error;

/// Errors returned by tessellation routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input point set is empty.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// Generator node set is empty.
    #[error("no nodes: at least one generator node is required")]
    NoNodes,

    /// Points and weights arrays disagree in length.
    #[error("length mismatch: {points} points but {weights} weights")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// An input value is NaN or infinite.
    #[error("non-finite {what} at index {index}")]
    NonFinite {
        /// Which input the value belongs to.
        what: &'static str,
        /// Index of the offending entry.
        index: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
