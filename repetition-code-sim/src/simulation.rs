//! Monte Carlo estimation of the logical failure probability.
//!
//! Each shot starts from a clean code, runs `depth` rounds of bit-flip noise
//! (with or without the correction loop) and ends with a majority vote. The
//! failure count over `shots` shots gives a point estimate and a Wilson
//! interval.
//!
//! Two sampling schemes are offered:
//! - [`estimate_with_ci`] advances one seeded rng through every shot in order.
//!   This is the reference scheme and what the sweeps use.
//! - [`estimate_with_ci_spawned`] gives every shot its own rng from
//!   [`spawn_seeds`], so shots can run on any number of threads and still
//!   reproduce exactly for a given seed. Its numbers differ from the
//!   single-stream scheme.

use std::collections::BTreeMap;

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::code::RepetitionCode;
use crate::config::RunnerConfig;
use crate::correction::run_single_shot;
use crate::decoder::MajorityVoteDecoder;
use crate::error::{QecError, Result};
use crate::noise::BitFlipChannel;
use crate::seeding::{make_rng, spawn_seeds};
use crate::stats::Estimate;

/// Default significance level (95% intervals).
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Uncorrected and corrected estimates for the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QecComparison {
    pub no_qec: Estimate,
    pub qec: Estimate,
}

/// Sweep output keyed by the swept parameter (depth or code size).
pub type SweepResults = BTreeMap<usize, QecComparison>;

fn check_shots(shots: usize) -> Result<()> {
    if shots == 0 {
        return Err(QecError::invalid("shots must be > 0"));
    }
    Ok(())
}

/// Count logical failures over `shots` shots drawn from one rng seeded with `seed`.
fn count_failures(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    decoder: Option<&MajorityVoteDecoder>,
    depth: usize,
    shots: usize,
    seed: u64,
) -> Result<usize> {
    let mut rng = make_rng(seed);
    let mut failures = 0;
    for _ in 0..shots {
        if run_single_shot(code, noise, decoder, depth, &mut rng)? {
            failures += 1;
        }
    }
    Ok(failures)
}

/// Estimate the logical failure probability with a Wilson interval at `1 - alpha`.
///
/// `decoder == None` runs the no-QEC baseline. Same arguments, same result.
pub fn estimate_with_ci(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    decoder: Option<&MajorityVoteDecoder>,
    depth: usize,
    shots: usize,
    seed: u64,
    alpha: f64,
) -> Result<Estimate> {
    check_shots(shots)?;
    let failures = count_failures(code, noise, decoder, depth, shots, seed)?;
    debug!(
        "n={} p={} depth={} qec={} seed={}: {}/{} failures",
        code.n_data(),
        noise.p(),
        depth,
        decoder.is_some(),
        seed,
        failures,
        shots
    );
    Estimate::from_counts(failures, shots, alpha)
}

/// Same as [`estimate_with_ci`] but with one independent rng per shot.
///
/// Shots run on the rayon pool when the `parallel` feature is enabled.
pub fn estimate_with_ci_spawned(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    decoder: Option<&MajorityVoteDecoder>,
    depth: usize,
    shots: usize,
    seed: u64,
    alpha: f64,
) -> Result<Estimate> {
    check_shots(shots)?;
    let seeds = spawn_seeds(seed, shots);

    #[cfg(feature = "parallel")]
    let shot_seeds = seeds.par_iter();
    #[cfg(not(feature = "parallel"))]
    let shot_seeds = seeds.iter();

    let outcomes = shot_seeds
        .map(|&s| run_single_shot(code, noise, decoder, depth, &mut make_rng(s)))
        .collect::<Result<Vec<bool>>>()?;
    let failures = outcomes.iter().filter(|&&failed| failed).count();

    debug!(
        "n={} p={} depth={} qec={} seed={} (spawned): {}/{} failures",
        code.n_data(),
        noise.p(),
        depth,
        decoder.is_some(),
        seed,
        failures,
        shots
    );
    Estimate::from_counts(failures, shots, alpha)
}

/// Point estimate only: `failures / shots` under the single-stream scheme.
pub fn estimate_logical_failure_probability(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    decoder: Option<&MajorityVoteDecoder>,
    depth: usize,
    shots: usize,
    seed: u64,
) -> Result<f64> {
    check_shots(shots)?;
    let failures = count_failures(code, noise, decoder, depth, shots, seed)?;
    Ok(failures as f64 / shots as f64)
}

/// No-QEC and QEC estimates for one code at one depth, both from `seed`.
pub fn compare_at_depth(
    code: &RepetitionCode,
    noise: &BitFlipChannel,
    depth: usize,
    shots: usize,
    seed: u64,
    alpha: f64,
) -> Result<QecComparison> {
    let decoder = MajorityVoteDecoder::new(code.n_data());
    Ok(QecComparison {
        no_qec: estimate_with_ci(code, noise, None, depth, shots, seed, alpha)?,
        qec: estimate_with_ci(code, noise, Some(&decoder), depth, shots, seed, alpha)?,
    })
}

/// Compare corrected and uncorrected failure rates across circuit depths.
pub fn depth_sweep_with_ci(cfg: &RunnerConfig, depths: &[usize], alpha: f64) -> Result<SweepResults> {
    let code = RepetitionCode::new(cfg.n)?;
    let noise = BitFlipChannel::new(cfg.p)?;

    let mut out = SweepResults::new();
    for &depth in depths {
        let cmp = compare_at_depth(&code, &noise, depth, cfg.shots, cfg.seed, alpha)?;
        info!(
            "n={} p={} depth={}: no_qec={:.4} qec={:.4}",
            cfg.n, cfg.p, depth, cmp.no_qec.p, cmp.qec.p
        );
        out.insert(depth, cmp);
    }
    Ok(out)
}

/// Compare corrected and uncorrected failure rates across code sizes at a fixed depth.
pub fn n_sweep_with_ci(
    ns: &[usize],
    p: f64,
    depth: usize,
    shots: usize,
    seed: u64,
    alpha: f64,
) -> Result<SweepResults> {
    let noise = BitFlipChannel::new(p)?;

    let mut out = SweepResults::new();
    for &n in ns {
        let code = RepetitionCode::new(n)?;
        let cmp = compare_at_depth(&code, &noise, depth, shots, seed, alpha)?;
        info!(
            "n={} p={} depth={}: no_qec={:.4} qec={:.4}",
            n, p, depth, cmp.no_qec.p, cmp.qec.p
        );
        out.insert(n, cmp);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize, p: f64) -> (RepetitionCode, BitFlipChannel, MajorityVoteDecoder) {
        (
            RepetitionCode::new(n).unwrap(),
            BitFlipChannel::new(p).unwrap(),
            MajorityVoteDecoder::new(n),
        )
    }

    #[test]
    fn test_zero_error_rate_no_logical_errors() {
        let (code, noise, dec) = setup(5, 0.0);
        for decoder in [None, Some(&dec)] {
            let est = estimate_with_ci(&code, &noise, decoder, 10, 200, 1, DEFAULT_ALPHA).unwrap();
            assert_eq!(est.failures, 0);
            assert_eq!(est.p, 0.0);
            assert_eq!(est.lo, 0.0);
        }
    }

    #[test]
    fn test_same_seed_bit_identical() {
        let (code, noise, dec) = setup(5, 0.08);
        let a = estimate_with_ci(&code, &noise, Some(&dec), 6, 300, 42, DEFAULT_ALPHA).unwrap();
        let b = estimate_with_ci(&code, &noise, Some(&dec), 6, 300, 42, DEFAULT_ALPHA).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawned_scheme_is_reproducible() {
        let (code, noise, dec) = setup(5, 0.08);
        let a = estimate_with_ci_spawned(&code, &noise, Some(&dec), 6, 300, 42, DEFAULT_ALPHA).unwrap();
        let b = estimate_with_ci_spawned(&code, &noise, Some(&dec), 6, 300, 42, DEFAULT_ALPHA).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let (code, noise, dec) = setup(5, 0.1);
        assert!(matches!(
            estimate_with_ci(&code, &noise, Some(&dec), 1, 0, 0, DEFAULT_ALPHA),
            Err(QecError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            estimate_with_ci_spawned(&code, &noise, None, 1, 0, 0, DEFAULT_ALPHA),
            Err(QecError::InvalidConfiguration(_))
        ));
        assert!(estimate_logical_failure_probability(&code, &noise, None, 1, 0, 0).is_err());
    }

    #[test]
    fn test_point_estimate_matches_ci_estimate() {
        let (code, noise, dec) = setup(7, 0.05);
        let p = estimate_logical_failure_probability(&code, &noise, Some(&dec), 8, 400, 3).unwrap();
        let est = estimate_with_ci(&code, &noise, Some(&dec), 8, 400, 3, DEFAULT_ALPHA).unwrap();
        assert_eq!(p, est.p);
    }

    #[test]
    fn test_estimates_contain_point() {
        let (code, noise, dec) = setup(3, 0.2);
        for depth in [1, 3, 9] {
            let est = estimate_with_ci(&code, &noise, Some(&dec), depth, 250, 5, DEFAULT_ALPHA).unwrap();
            assert!(0.0 <= est.lo && est.lo <= est.p && est.p <= est.hi && est.hi <= 1.0);
        }
    }

    #[test]
    fn test_depth_sweep_keys_and_shots() {
        let cfg = RunnerConfig {
            n: 5,
            p: 0.05,
            shots: 100,
            seed: 9,
        };
        let results = depth_sweep_with_ci(&cfg, &[1, 4, 2], DEFAULT_ALPHA).unwrap();
        assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
        for cmp in results.values() {
            assert_eq!(cmp.no_qec.shots, 100);
            assert_eq!(cmp.qec.shots, 100);
        }
    }

    #[test]
    fn test_depth_sweep_rejects_bad_config() {
        let cfg = RunnerConfig {
            n: 2,
            p: 0.05,
            shots: 100,
            seed: 9,
        };
        assert!(depth_sweep_with_ci(&cfg, &[1], DEFAULT_ALPHA).is_err());
    }

    #[test]
    fn test_n_sweep_keys() {
        let results = n_sweep_with_ci(&[3, 5, 7], 0.05, 5, 100, 1, DEFAULT_ALPHA).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.contains_key(&7));
    }

    #[test]
    fn test_qec_beats_no_qec_at_depth_20() {
        let cfg = RunnerConfig {
            n: 5,
            p: 0.1,
            shots: 2000,
            seed: 42,
        };
        let results = depth_sweep_with_ci(&cfg, &[20], DEFAULT_ALPHA).unwrap();
        let cmp = results[&20];
        assert!(
            cmp.qec.p < cmp.no_qec.p,
            "QEC {} should beat no-QEC {}",
            cmp.qec.p,
            cmp.no_qec.p
        );
    }
}
