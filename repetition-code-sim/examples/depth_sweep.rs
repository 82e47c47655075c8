//! Depth sweep: how much does the correction loop buy as circuits get deeper?
//!
//! Without correction, each qubit's error is a random walk: after d rounds it
//! is flipped with probability (1 - (1 - 2p)^d) / 2, which tends to 1/2, so
//! the majority vote fails about half the time for deep circuits.
//!
//! With the correction loop, every round's new flips are matched against the
//! syndrome change they caused. Only rounds with several nearby flips leave a
//! residue, so the logical failure rate grows far more slowly with depth.

use repetition_code_sim::prelude::*;

fn main() -> Result<(), QecError> {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║     Repetition Code: QEC vs no QEC over depth            ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    // ═══ 1. Depth sweep at fixed n ═══
    let cfg = RunnerConfig {
        n: 5,
        p: 0.1,
        shots: 2000,
        seed: 42,
    };
    println!("═══ 1. Depth sweep (n={}, p={}, {} shots) ═══", cfg.n, cfg.p, cfg.shots);
    println!();
    let depths = [1, 2, 5, 10, 20, 40];
    let results = cfg.depth_sweep(&depths, DEFAULT_ALPHA)?;
    print!("{}", to_table(&results, "depth"));
    println!();

    println!("  Closed-form no-QEC single-qubit flip probability:");
    for &d in &depths {
        let q = (1.0 - (1.0 - 2.0 * cfg.p).powi(d as i32)) / 2.0;
        println!("    d={:>3}: {:.4}", d, q);
    }
    println!();

    // ═══ 2. Code size at fixed depth ═══
    println!("═══ 2. Code size sweep (p=0.05, depth=10) ═══");
    println!();
    let by_n = n_sweep_with_ci(&[3, 5, 7, 9, 11], 0.05, 10, 2000, 7, DEFAULT_ALPHA)?;
    print!("{}", to_table(&by_n, "n"));
    println!();

    // ═══ 3. Parallel shots ═══
    println!("═══ 3. Independent per-shot streams ═══");
    println!();
    let code = RepetitionCode::new(5)?;
    let noise = BitFlipChannel::new(0.1)?;
    let decoder = MajorityVoteDecoder::new(5);
    let spawned = estimate_with_ci_spawned(&code, &noise, Some(&decoder), 20, 20_000, 42, DEFAULT_ALPHA)?;
    println!(
        "  n=5 p=0.1 depth=20: p = {:.4}  [{:.4}, {:.4}]  ({} shots)",
        spawned.p, spawned.lo, spawned.hi, spawned.shots
    );
    println!();

    Ok(())
}
