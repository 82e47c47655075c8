//! Syndromes and syndrome deltas for the repetition code.
//!
//! A syndrome holds one bit per ZZ check. A set bit is a **defect**: the two
//! neighbouring qubits disagree, so an error string ends between them.
//!
//! Under repeated measurement the decoder looks at the **delta**, the XOR of
//! two consecutive syndromes. Defects in the delta mark where the error
//! pattern changed since the previous round.

use crate::error::{QecError, Result};

/// Outcome of measuring every check once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syndrome {
    bits: Vec<bool>,
}

impl Syndrome {
    /// All-zero syndrome for `num_checks` checks (the state before any round).
    pub fn zeros(num_checks: usize) -> Self {
        Self {
            bits: vec![false; num_checks],
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Per-check XOR with a later syndrome of the same code.
    pub fn delta(&self, now: &Syndrome) -> Result<Syndrome> {
        if self.len() != now.len() {
            return Err(QecError::LengthMismatch {
                expected: self.len(),
                got: now.len(),
            });
        }
        Ok(Syndrome {
            bits: self
                .bits
                .iter()
                .zip(&now.bits)
                .map(|(&a, &b)| a ^ b)
                .collect(),
        })
    }

    /// Indices of the checks that fired.
    pub fn defects(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    pub fn num_defects(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// No check fired.
    pub fn is_clean(&self) -> bool {
        self.bits.iter().all(|&b| !b)
    }
}
