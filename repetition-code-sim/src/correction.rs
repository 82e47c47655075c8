//! Multi-round error tracking with syndrome-difference decoding.
//!
//! One shot evolves three pieces of state over `depth` rounds:
//! - the **physical** X error vector, which only noise ever touches
//! - the **correction frame**, the XOR of every correction inferred so far
//! - the **previous syndrome**, measured on the corrected state last round
//!
//! The effective error is `physical ^ frame`. It is never stored; corrections
//! are applied virtually, the way a Pauli frame is.
//!
//! Each round:
//! 1. noise acts on the physical vector
//! 2. the effective state is measured
//! 3. the delta against the previous syndrome is taken
//! 4. defects in the delta are matched greedily to data-qubit flips
//! 5. the flips are XORed into the frame
//! 6. the corrected state is re-measured and kept for the next round
//!
//! Decoding the delta instead of the raw syndrome means only errors that
//! appeared this round are explained; residual defects left by an earlier
//! imperfect correction become part of the baseline.

use log::trace;
use rand::Rng;

use crate::code::RepetitionCode;
use crate::decoder::MajorityVoteDecoder;
use crate::error::{QecError, Result};
use crate::noise::BitFlipChannel;
use crate::syndrome::Syndrome;

/// Elementwise XOR of two bit vectors. Callers pass vectors of the same code.
fn xor_bits(a: &[bool], b: &[bool]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x ^ y).collect()
}

/// Greedy left-to-right matching of delta defects to data-qubit flips.
///
/// For a defect at check `i`, the first rule that applies wins:
/// - **pair**: check `i + 1` also fired, so flip qubit `i + 1` (the qubit both
///   checks share) and consume both defects
/// - **left edge**: `i == 0`, flip qubit 0
/// - **right edge**: `i` is the last check, flip qubit `n - 1`
/// - **isolated interior**: flip qubit `i` or `i + 1` by a fair coin from `rng`
///
/// The rng is consulted only for isolated interior defects, in scan order.
/// Returns an n-bit flip mask, or `LengthMismatch` unless the delta has
/// exactly `n - 1` checks.
pub fn infer_data_flips_from_delta<R: Rng>(
    delta: &Syndrome,
    n: usize,
    rng: &mut R,
) -> Result<Vec<bool>> {
    if delta.len() + 1 != n {
        return Err(QecError::LengthMismatch {
            expected: n.saturating_sub(1),
            got: delta.len(),
        });
    }
    let mut d = delta.bits().to_vec();
    let last = d.len().saturating_sub(1);
    let mut flips = vec![false; n];
    let mut i = 0;

    while i < d.len() {
        if !d[i] {
            i += 1;
            continue;
        }
        if i < last && d[i + 1] {
            flips[i + 1] ^= true;
            d[i] = false;
            d[i + 1] = false;
            i += 2;
            continue;
        }
        if i == 0 {
            flips[0] ^= true;
        } else if i == last {
            flips[n - 1] ^= true;
        } else if rng.gen::<f64>() < 0.5 {
            flips[i] ^= true;
        } else {
            flips[i + 1] ^= true;
        }
        d[i] = false;
        i += 1;
    }

    Ok(flips)
}

/// Per-shot state of the correction loop. Created all-zero, dropped at shot end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotState {
    physical: Vec<bool>,
    frame: Vec<bool>,
    syndrome_prev: Syndrome,
}

impl ShotState {
    pub fn new(code: &RepetitionCode) -> Self {
        Self {
            physical: vec![false; code.n_data()],
            frame: vec![false; code.n_data()],
            syndrome_prev: Syndrome::zeros(code.num_checks()),
        }
    }

    /// Accumulated physical errors.
    pub fn physical(&self) -> &[bool] {
        &self.physical
    }

    /// Accumulated inferred corrections.
    pub fn frame(&self) -> &[bool] {
        &self.frame
    }

    /// Syndrome of the corrected state at the end of the last round.
    pub fn previous_syndrome(&self) -> &Syndrome {
        &self.syndrome_prev
    }

    /// `physical ^ frame`.
    pub fn effective(&self) -> Vec<bool> {
        xor_bits(&self.physical, &self.frame)
    }

    /// Force an X error on qubit `k`, bypassing the noise channel.
    pub fn inject_flip(&mut self, k: usize) -> Result<()> {
        let len = self.physical.len();
        let bit = self
            .physical
            .get_mut(k)
            .ok_or(QecError::OutOfRange { index: k, len })?;
        *bit ^= true;
        Ok(())
    }

    /// Step 1 of a round: physical errors evolve under noise.
    pub fn apply_noise<R: Rng>(&mut self, noise: &BitFlipChannel, rng: &mut R) {
        noise.apply_in_place(&mut self.physical, rng);
    }

    /// Steps 2 to 6 of a round. Returns the flips added to the frame.
    pub fn correct<R: Rng>(&mut self, code: &RepetitionCode, rng: &mut R) -> Result<Vec<bool>> {
        let syndrome_now = code.measure_syndrome(&self.effective())?;
        let delta = self.syndrome_prev.delta(&syndrome_now)?;
        let flips = infer_data_flips_from_delta(&delta, code.n_data(), rng)?;
        trace!(
            "delta defects {:?} -> flips {:?}",
            delta.defects(),
            flips.iter().enumerate().filter_map(|(q, &f)| f.then_some(q)).collect::<Vec<_>>()
        );

        self.frame = xor_bits(&self.frame, &flips);
        self.syndrome_prev = code.measure_syndrome(&self.effective())?;
        Ok(flips)
    }

    /// State handed to the final decoder: effective when decoding ran, raw physical otherwise.
    pub fn final_state(&self, decoding: bool) -> Vec<bool> {
        if decoding {
            self.effective()
        } else {
            self.physical.clone()
        }
    }
}

/// Run one shot of `depth` rounds and report whether it ended in logical failure.
///
/// With `decoder == None` only noise is applied (the no-QEC baseline). In both
/// cases the verdict comes from a majority vote over the final state. A
/// supplied decoder must be sized for `code`.
pub fn run_single_shot<R: Rng>(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    decoder: Option<&MajorityVoteDecoder>,
    depth: usize,
    rng: &mut R,
) -> Result<bool> {
    if let Some(dec) = decoder {
        if dec.n() != code.n_data() {
            return Err(QecError::invalid(format!(
                "decoder sized for {} qubits, code has {}",
                dec.n(),
                code.n_data()
            )));
        }
    }
    let decoding = decoder.is_some();
    let mut state = ShotState::new(code);

    for _ in 0..depth {
        state.apply_noise(noise, rng);
        if decoding {
            state.correct(code, rng)?;
        }
    }

    let verdict = MajorityVoteDecoder::new(code.n_data());
    Ok(verdict.decode(&state.final_state(decoding)))
}
