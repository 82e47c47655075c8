//! `qec-sim`: command-line front end for the repetition code simulator.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use repetition_code_sim::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "qec-sim", version)]
#[command(about = "Repetition code logical failure estimates under bit-flip noise")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the logical failure probability for one configuration
    Estimate {
        /// Number of data qubits
        #[arg(long, default_value_t = 5)]
        n: usize,

        /// Physical bit-flip probability per qubit per round
        #[arg(long, default_value_t = 0.1)]
        p: f64,

        /// Number of noise (and correction) rounds
        #[arg(long, default_value_t = 20)]
        depth: usize,

        #[arg(long, default_value_t = 2000)]
        shots: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, value_enum, default_value_t = DecoderKind::MajorityVote)]
        decoder: DecoderKind,

        /// Significance level of the Wilson interval
        #[arg(long, default_value_t = DEFAULT_ALPHA)]
        alpha: f64,

        /// Give each shot its own rng (runs shots in parallel)
        #[arg(long)]
        spawned: bool,
    },

    /// Compare QEC and no-QEC failure rates across depths
    Sweep {
        #[arg(long, default_value_t = 5)]
        n: usize,

        #[arg(long, default_value_t = 0.1)]
        p: f64,

        /// Depths to evaluate
        #[arg(long, num_args = 1.., default_values_t = vec![1, 2, 5, 10, 20])]
        depths: Vec<usize>,

        #[arg(long, default_value_t = 2000)]
        shots: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_ALPHA)]
        alpha: f64,

        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare QEC and no-QEC failure rates across code sizes at a fixed depth
    SweepN {
        /// Code sizes to evaluate
        #[arg(long, num_args = 1.., default_values_t = vec![3, 5, 7, 9])]
        ns: Vec<usize>,

        #[arg(long, default_value_t = 0.1)]
        p: f64,

        #[arg(long, default_value_t = 10)]
        depth: usize,

        #[arg(long, default_value_t = 2000)]
        shots: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_ALPHA)]
        alpha: f64,

        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run an experiment described by a JSON spec file
    Run {
        #[arg(long)]
        spec: PathBuf,

        #[arg(long, default_value_t = DEFAULT_ALPHA)]
        alpha: f64,
    },
}

fn print_estimate(label: &str, est: &Estimate) {
    println!(
        "{label}: p = {:.5}  [{:.5}, {:.5}]  ({}/{} failures)",
        est.p, est.lo, est.hi, est.failures, est.shots
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            println!("qec-sim is wired. Subcommands: estimate, sweep, sweep-n, run (see --help).");
        }
        Some(Commands::Estimate {
            n,
            p,
            depth,
            shots,
            seed,
            decoder,
            alpha,
            spawned,
        }) => {
            let spec = ExperimentSpec {
                code: CodeKind::Repetition,
                n,
                p,
                depth,
                shots,
                seed,
                decoder,
            };
            spec.validate()?;
            let est = if spawned {
                let code = RepetitionCode::new(n)?;
                let noise = BitFlipChannel::new(p)?;
                estimate_with_ci_spawned(
                    &code,
                    &noise,
                    spec.build_decoder().as_ref(),
                    depth,
                    shots,
                    seed,
                    alpha,
                )?
            } else {
                spec.run(alpha)?
            };
            print_estimate(&format!("n={n} p={p} depth={depth} decoder={decoder:?}"), &est);
        }
        Some(Commands::Sweep {
            n,
            p,
            depths,
            shots,
            seed,
            alpha,
            format,
            output,
        }) => {
            let cfg = RunnerConfig { n, p, shots, seed };
            info!("depth sweep over {:?} (n={n}, p={p}, shots={shots})", depths);
            let results = cfg.depth_sweep(&depths, alpha)?;
            write_report(&results, "depth", format, output.as_deref())
                .context("failed to write depth sweep report")?;
        }
        Some(Commands::SweepN {
            ns,
            p,
            depth,
            shots,
            seed,
            alpha,
            format,
            output,
        }) => {
            info!("code size sweep over {:?} (p={p}, depth={depth}, shots={shots})", ns);
            let results = n_sweep_with_ci(&ns, p, depth, shots, seed, alpha)?;
            write_report(&results, "n", format, output.as_deref())
                .context("failed to write code size sweep report")?;
        }
        Some(Commands::Run { spec, alpha }) => {
            let experiment = ExperimentSpec::from_json_file(&spec)
                .with_context(|| format!("failed to load spec {}", spec.display()))?;
            let est = experiment.run(alpha)?;
            print_estimate(&spec.display().to_string(), &est);
        }
    }

    Ok(())
}
