//! Serializable run parameters.
//!
//! `RunnerConfig` carries what a sweep needs; `ExperimentSpec` describes a
//! single estimate, including which code and decoder to use, and can be
//! loaded from a JSON file:
//!
//! ```json
//! { "code": "repetition", "n": 5, "p": 0.1, "depth": 20,
//!   "shots": 2000, "seed": 42, "decoder": "majority_vote" }
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::code::RepetitionCode;
use crate::decoder::MajorityVoteDecoder;
use crate::error::{QecError, Result};
use crate::noise::BitFlipChannel;
use crate::simulation::{depth_sweep_with_ci, estimate_with_ci, SweepResults};
use crate::stats::Estimate;

/// Parameters shared by every point of a depth sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of data qubits
    pub n: usize,
    /// Physical bit-flip probability per qubit per round
    pub p: f64,
    /// Monte Carlo shots per point
    pub shots: usize,
    /// Base rng seed
    #[serde(default)]
    pub seed: u64,
}

impl RunnerConfig {
    pub fn depth_sweep(&self, depths: &[usize], alpha: f64) -> Result<SweepResults> {
        depth_sweep_with_ci(self, depths, alpha)
    }
}

/// Which code family to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    #[default]
    Repetition,
}

/// Which per-round decoding to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DecoderKind {
    /// Noise only; the final majority vote still runs.
    None,
    /// Syndrome-difference correction loop followed by a majority vote.
    #[default]
    MajorityVote,
}

/// A single experiment: one code, one noise level, one depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSpec {
    /// Code family
    #[serde(default)]
    pub code: CodeKind,
    /// Number of data qubits
    pub n: usize,
    /// Physical bit-flip probability per qubit per round
    pub p: f64,
    /// Noise (and correction) rounds per shot
    pub depth: usize,
    /// Monte Carlo shots
    pub shots: usize,
    /// Rng seed for the shot stream
    #[serde(default)]
    pub seed: u64,
    /// Per-round decoding, or none for the baseline
    #[serde(default)]
    pub decoder: DecoderKind,
}

impl ExperimentSpec {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Reject parameters no run could accept.
    pub fn validate(&self) -> Result<()> {
        RepetitionCode::new(self.n)?;
        BitFlipChannel::new(self.p)?;
        if self.shots == 0 {
            return Err(QecError::invalid("shots must be > 0"));
        }
        Ok(())
    }

    /// Build the components and run the estimate.
    pub fn run(&self, alpha: f64) -> Result<Estimate> {
        let code = match self.code {
            CodeKind::Repetition => RepetitionCode::new(self.n)?,
        };
        let noise = BitFlipChannel::new(self.p)?;
        let decoder = self.build_decoder();
        estimate_with_ci(
            &code,
            &noise,
            decoder.as_ref(),
            self.depth,
            self.shots,
            self.seed,
            alpha,
        )
    }

    /// Decoder instance for this spec, `None` for the uncorrected baseline.
    pub fn build_decoder(&self) -> Option<MajorityVoteDecoder> {
        match self.decoder {
            DecoderKind::None => None,
            DecoderKind::MajorityVote => Some(MajorityVoteDecoder::new(self.n)),
        }
    }

    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            n: self.n,
            p: self.p,
            shots: self.shots,
            seed: self.seed,
        }
    }
}
