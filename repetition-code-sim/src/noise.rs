//! Independent bit-flip noise.
//!
//! Each round, every data qubit suffers an X error with probability p,
//! independently of the others and of earlier rounds. One uniform draw is
//! taken from the caller's rng per qubit, in index order, so a seeded rng
//! reproduces the same error history.

use rand::Rng;

use crate::error::{QecError, Result};

/// Bit-flip channel: X with probability p, identity otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipChannel {
    p: f64,
}

impl BitFlipChannel {
    /// Create a channel. `p` must lie in `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(QecError::invalid(format!("p must be in [0, 1], got {p}")));
        }
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Return a copy of `errors` with each bit toggled with probability p.
    pub fn apply<R: Rng>(&self, errors: &[bool], rng: &mut R) -> Vec<bool> {
        let mut out = errors.to_vec();
        self.apply_in_place(&mut out, rng);
        out
    }

    /// Toggle each bit of `errors` with probability p.
    pub fn apply_in_place<R: Rng>(&self, errors: &mut [bool], rng: &mut R) {
        for bit in errors.iter_mut() {
            if rng.gen::<f64>() < self.p {
                *bit ^= true;
            }
        }
    }
}
