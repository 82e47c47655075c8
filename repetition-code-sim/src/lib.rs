//! # repetition-code-sim
//!
//! Monte Carlo simulator for the 1D bit-flip repetition code, using Pauli
//! frame tracking.
//!
//! Estimates the logical failure probability of an N-qubit repetition code
//! after `depth` rounds of independent bit-flip noise, with and without an
//! active correction loop, and reports each estimate with a Wilson score
//! interval. Errors are tracked as classical bit vectors (N bits), so any
//! code size runs in O(N) memory per shot.
//!
//! ## Physics
//!
//! - **Checks**: ZZ parity between neighbouring qubits; N - 1 of them
//! - **Defect**: a check whose two qubits disagree
//! - **Correction**: each round, defects that *changed* since the last round
//!   are matched greedily to data-qubit flips, accumulated in a frame
//! - **Logical failure**: a majority of qubits flipped at the end of the shot
//!
//! ## Usage
//!
//! ```no_run
//! use repetition_code_sim::prelude::*;
//!
//! let cfg = RunnerConfig { n: 5, p: 0.1, shots: 2000, seed: 42 };
//! let results = depth_sweep_with_ci(&cfg, &[1, 5, 10, 20], DEFAULT_ALPHA)?;
//! for (depth, cmp) in &results {
//!     println!("{depth}: no_qec={:.4} qec={:.4}", cmp.no_qec.p, cmp.qec.p);
//! }
//! # Ok::<(), repetition_code_sim::error::QecError>(())
//! ```

pub mod error;
pub mod code;
pub mod syndrome;
pub mod noise;
pub mod decoder;
pub mod correction;
pub mod stats;
pub mod seeding;
pub mod simulation;
pub mod config;
pub mod report;

pub mod prelude {
    pub use crate::error::QecError;
    pub use crate::code::*;
    pub use crate::syndrome::*;
    pub use crate::noise::*;
    pub use crate::decoder::*;
    pub use crate::correction::*;
    pub use crate::stats::*;
    pub use crate::seeding::*;
    pub use crate::simulation::*;
    pub use crate::config::*;
    pub use crate::report::*;
}
