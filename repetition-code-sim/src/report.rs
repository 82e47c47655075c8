//! Sweep output for people and plotting tools.
//!
//! A plot of a sweep needs, per x value and per series (`no_qec`, `qec`),
//! the point estimate and its asymmetric error bars `p - lo` and `hi - p`.
//! This module renders exactly that as a console table, CSV rows or JSON.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::simulation::{QecComparison, SweepResults};
use crate::stats::Estimate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

fn series(cmp: &QecComparison) -> [(&'static str, &Estimate); 2] {
    [("no_qec", &cmp.no_qec), ("qec", &cmp.qec)]
}

/// Fixed-width table, one row per x value.
pub fn to_table(results: &SweepResults, x_label: &str) -> String {
    let mut out = format!(
        "  {:>6}  {:>10}  {:>20}  {:>10}  {:>20}\n",
        x_label, "p(no_qec)", "interval", "p(qec)", "interval"
    );
    out.push_str(&format!(
        "  {:─>6}  {:─>10}  {:─>20}  {:─>10}  {:─>20}\n",
        "", "", "", "", ""
    ));
    for (x, cmp) in results {
        out.push_str(&format!(
            "  {:>6}  {:>10.5}  [{:>8.5}, {:>8.5}]  {:>10.5}  [{:>8.5}, {:>8.5}]\n",
            x, cmp.no_qec.p, cmp.no_qec.lo, cmp.no_qec.hi, cmp.qec.p, cmp.qec.lo, cmp.qec.hi
        ));
    }
    out
}

/// CSV with a header row; two rows (one per series) for each x value.
pub fn to_csv(results: &SweepResults, x_label: &str) -> String {
    let mut out = format!("{x_label},series,p,lo,hi,err_lo,err_hi,failures,shots\n");
    for (x, cmp) in results {
        for (name, est) in series(cmp) {
            let (err_lo, err_hi) = est.error_bars();
            out.push_str(&format!(
                "{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{},{}\n",
                x, name, est.p, est.lo, est.hi, err_lo, err_hi, est.failures, est.shots
            ));
        }
    }
    out
}

/// Pretty JSON object keyed by x value.
pub fn to_json(results: &SweepResults) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn render(results: &SweepResults, x_label: &str, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(to_table(results, x_label)),
        ReportFormat::Csv => Ok(to_csv(results, x_label)),
        ReportFormat::Json => to_json(results),
    }
}

/// Render to `output`, or to stdout when no path is given.
pub fn write_report(
    results: &SweepResults,
    x_label: &str,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let text = render(results, x_label, format)?;
    match output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SweepResults {
        let mut results = SweepResults::new();
        results.insert(
            4,
            QecComparison {
                no_qec: Estimate::from_counts(30, 100, 0.05).unwrap(),
                qec: Estimate::from_counts(5, 100, 0.05).unwrap(),
            },
        );
        results.insert(
            1,
            QecComparison {
                no_qec: Estimate::from_counts(10, 100, 0.05).unwrap(),
                qec: Estimate::from_counts(0, 100, 0.05).unwrap(),
            },
        );
        results
    }

    #[test]
    fn test_csv_rows_sorted_by_x() {
        let csv = to_csv(&sample(), "depth");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "depth,series,p,lo,hi,err_lo,err_hi,failures,shots");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("1,no_qec,0.100000,"));
        assert!(lines[2].starts_with("1,qec,0.000000,0.000000,"));
        assert!(lines[4].ends_with(",5,100"));
    }

    #[test]
    fn test_table_has_row_per_point() {
        let table = to_table(&sample(), "n");
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().next().unwrap().contains("p(qec)"));
    }

    #[test]
    fn test_json_roundtrip() {
        let results = sample();
        let json = to_json(&results).unwrap();
        let back: SweepResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        write_report(&sample(), "depth", ReportFormat::Csv, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv(&sample(), "depth"));
    }
}
