//! Error type shared by every component of the simulator.

use thiserror::Error;

/// Errors raised while building or running a simulation.
///
/// None of these are recoverable: they signal a bad parameter or an
/// integration bug and propagate to whoever started the run.
#[derive(Debug, Error)]
pub enum QecError {
    /// A parameter is outside its valid domain (code size, probability, shot count, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A bit vector does not match the code's data-qubit count.
    #[error("length mismatch: expected {expected} bits, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A qubit index outside `0..len`.
    #[error("qubit index {index} out of range for {len} data qubits")]
    OutOfRange { index: usize, len: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QecError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        QecError::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, QecError>;
