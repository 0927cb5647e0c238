//! Error type shared by configuration validation and the run driver.

/// Errors reported before a run starts.
///
/// The evolutionary pipeline itself has no runtime failure modes; every
/// variant here describes input that the driver refuses to start with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("problem instance has no items")]
    EmptyInstance,

    #[error("population size mismatch: expected {expected}, got {actual}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    #[error("chromosome {index} has length {actual}, expected {expected}")]
    ChromosomeLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
