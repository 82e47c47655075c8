//! Repetition code layout with bit-flip (X) error tracking.
//!
//! The code lives on a 1D chain of N data qubits. Between each pair of
//! neighbours sits one ZZ parity check:
//! - check i compares qubit i with qubit i+1, for i in 0..N-1
//! - a check fires when exactly one of its two qubits carries an X error
//!
//! As in a Pauli frame simulator we never store amplitudes: an error state is
//! a classical bit vector of length N, and syndromes are derived from it.

use crate::error::{QecError, Result};
use crate::syndrome::Syndrome;

/// A parity check between two neighbouring data qubits `(i, i + 1)`.
pub type Check = (usize, usize);

/// A stabilizer generator: its Pauli string and the qubits it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stabilizer {
    pub pauli: &'static str,
    pub check: Check,
}

/// A logical operator: Pauli string plus its support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalOperator {
    pub pauli: String,
    pub support: Vec<usize>,
}

/// The N-qubit bit-flip repetition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionCode {
    n: usize,
}

impl RepetitionCode {
    /// Smallest code that can both detect and correct a single flip.
    pub const MIN_SIZE: usize = 3;

    /// Create an N-qubit repetition code. Fails for `n < 3`.
    pub fn new(n: usize) -> Result<Self> {
        if n < Self::MIN_SIZE {
            return Err(QecError::invalid(format!(
                "repetition code requires n >= {}, got {n}",
                Self::MIN_SIZE
            )));
        }
        Ok(Self { n })
    }

    /// Number of data qubits.
    pub fn n_data(&self) -> usize {
        self.n
    }

    /// Number of parity checks (always N - 1).
    pub fn num_checks(&self) -> usize {
        self.n - 1
    }

    /// Code distance against X errors.
    pub fn distance(&self) -> usize {
        self.n
    }

    /// Adjacent-pair checks `(i, i + 1)` in left-to-right order.
    pub fn checks(&self) -> Vec<Check> {
        (0..self.n - 1).map(|i| (i, i + 1)).collect()
    }

    /// ZZ stabilizer generators, one per check.
    pub fn stabilizers(&self) -> Vec<Stabilizer> {
        self.checks()
            .into_iter()
            .map(|check| Stabilizer { pauli: "ZZ", check })
            .collect()
    }

    /// X̄ = X on every data qubit.
    pub fn logical_x(&self) -> LogicalOperator {
        LogicalOperator {
            pauli: "X".repeat(self.n),
            support: (0..self.n).collect(),
        }
    }

    /// Z̄ = Z on qubit 0. Any single Z works since all qubits agree in the code space.
    pub fn logical_z(&self) -> LogicalOperator {
        LogicalOperator {
            pauli: "Z".to_string(),
            support: vec![0],
        }
    }

    /// Measure every check against an X error vector.
    ///
    /// Bit i of the result is `errors[i] ^ errors[i + 1]`.
    pub fn measure_syndrome(&self, errors: &[bool]) -> Result<Syndrome> {
        if errors.len() != self.n {
            return Err(QecError::LengthMismatch {
                expected: self.n,
                got: errors.len(),
            });
        }
        Ok(Syndrome::from_bits(
            errors.windows(2).map(|pair| pair[0] ^ pair[1]).collect(),
        ))
    }

    /// Syndrome produced by a lone X error on qubit `k`.
    ///
    /// Endpoints light one check, interior qubits light the two checks either side.
    pub fn expected_syndrome_for_single_flip(&self, k: usize) -> Result<Syndrome> {
        if k >= self.n {
            return Err(QecError::OutOfRange {
                index: k,
                len: self.n,
            });
        }
        let mut errors = vec![false; self.n];
        errors[k] = true;
        self.measure_syndrome(&errors)
    }

    /// Internal consistency of the derived layout.
    pub fn validate(&self) -> Result<()> {
        if self.checks().len() != self.n - 1 {
            return Err(QecError::invalid("checks length mismatch"));
        }
        if self.stabilizers().len() != self.n - 1 {
            return Err(QecError::invalid("stabilizers length mismatch"));
        }
        Ok(())
    }
}
