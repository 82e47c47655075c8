//! Binomial confidence intervals for logical failure counts.

use serde::{Deserialize, Serialize};

use crate::error::{QecError, Result};

/// Two-sided z-values for the standard significance levels.
const Z_TABLE: [(f64, f64); 4] = [
    (0.10, 1.644_853_626_951_472_2),
    (0.05, 1.959_963_984_540_054),
    (0.01, 2.575_829_303_548_900_4),
    (0.001, 3.290_526_731_491_925_5),
];

/// z-value for `alpha`; unknown levels fall back to the 95% value.
pub fn z_value(alpha: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|&&(a, _)| a == alpha)
        .map_or(Z_TABLE[1].1, |&(_, z)| z)
}

/// Wilson score interval for `failures` out of `shots` at confidence `1 - alpha`.
///
/// Returns `(lo, hi)` clipped to `[0, 1]`. With zero failures `lo` is exactly 0
/// and with `failures == shots` `hi` is exactly 1.
pub fn wilson_interval(failures: usize, shots: usize, alpha: f64) -> Result<(f64, f64)> {
    if shots == 0 {
        return Err(QecError::invalid("shots must be > 0"));
    }
    if failures > shots {
        return Err(QecError::invalid(format!(
            "failures must be in [0, {shots}], got {failures}"
        )));
    }

    let z = z_value(alpha);
    let n = shots as f64;
    let p = failures as f64 / n;
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let rad = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    let lo = if failures == 0 { 0.0 } else { (center - rad).max(0.0) };
    let hi = if failures == shots { 1.0 } else { (center + rad).min(1.0) };
    Ok((lo, hi))
}

/// Point estimate of a logical failure probability with its confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Observed failure rate `failures / shots`
    pub p: f64,
    /// Lower Wilson bound
    pub lo: f64,
    /// Upper Wilson bound
    pub hi: f64,
    /// Shots that ended in logical failure
    pub failures: usize,
    /// Total shots
    pub shots: usize,
}

impl Estimate {
    /// Build from raw counts. Guarantees `0 <= lo <= p <= hi <= 1`.
    pub fn from_counts(failures: usize, shots: usize, alpha: f64) -> Result<Self> {
        let (lo, hi) = wilson_interval(failures, shots, alpha)?;
        let p = failures as f64 / shots as f64;
        Ok(Self {
            p,
            lo: lo.min(p),
            hi: hi.max(p),
            failures,
            shots,
        })
    }

    /// Asymmetric error bars `(p - lo, hi - p)` for plotting.
    pub fn error_bars(&self) -> (f64, f64) {
        (self.p - self.lo, self.hi - self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_z_lookup() {
        assert_abs_diff_eq!(z_value(0.05), 1.959963984540054);
        assert_abs_diff_eq!(z_value(0.01), 2.5758293035489004);
        // unknown alpha falls back to 95%
        assert_abs_diff_eq!(z_value(0.2), 1.959963984540054);
    }

    #[test]
    fn test_wilson_zero_failures() {
        let (lo, hi) = wilson_interval(0, 100, 0.05).unwrap();
        assert_eq!(lo, 0.0);
        // z²/n / (1 + z²/n) with z = 1.96, n = 100
        assert_abs_diff_eq!(hi, 0.036994, epsilon = 1e-5);
    }

    #[test]
    fn test_wilson_symmetric_at_half() {
        let (lo, hi) = wilson_interval(50, 100, 0.05).unwrap();
        assert_abs_diff_eq!((lo + hi) / 2.0, 0.5, epsilon = 1e-12);
        assert!(lo < 0.5 && hi > 0.5);
    }

    #[test]
    fn test_wilson_all_failures() {
        let (lo, hi) = wilson_interval(100, 100, 0.05).unwrap();
        assert_eq!(hi, 1.0);
        assert_abs_diff_eq!(lo, 1.0 - 0.036994, epsilon = 1e-5);
    }

    #[test]
    fn test_wilson_widens_with_confidence() {
        let (lo90, hi90) = wilson_interval(10, 100, 0.10).unwrap();
        let (lo999, hi999) = wilson_interval(10, 100, 0.001).unwrap();
        assert!(hi90 - lo90 < hi999 - lo999);
    }

    #[test]
    fn test_wilson_rejects_bad_counts() {
        assert!(matches!(
            wilson_interval(0, 0, 0.05),
            Err(QecError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            wilson_interval(11, 10, 0.05),
            Err(QecError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_estimate_error_bars() {
        let est = Estimate::from_counts(25, 100, 0.05).unwrap();
        assert_abs_diff_eq!(est.p, 0.25);
        let (down, up) = est.error_bars();
        assert!(down > 0.0 && up > 0.0);
        assert_abs_diff_eq!(est.p - down, est.lo, epsilon = 1e-12);
        assert_abs_diff_eq!(est.p + up, est.hi, epsilon = 1e-12);
    }
}
