//! Step through one shot round by round and print the tracked state.
//!
//! Shows the three pieces of per-shot state: the physical errors, the
//! correction frame, and the syndrome kept as the next round's baseline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use repetition_code_sim::prelude::*;

fn bits(v: &[bool]) -> String {
    v.iter().map(|&b| if b { '1' } else { '.' }).collect()
}

fn main() -> Result<(), QecError> {
    let code = RepetitionCode::new(9)?;
    let noise = BitFlipChannel::new(0.08)?;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut state = ShotState::new(&code);

    println!("round  physical   frame      effective  syndrome  flips");
    for round in 1..=12 {
        state.apply_noise(&noise, &mut rng);
        let flips = state.correct(&code, &mut rng)?;
        println!(
            "{:>5}  {}  {}  {}  {}  {}",
            round,
            bits(state.physical()),
            bits(state.frame()),
            bits(&state.effective()),
            bits(state.previous_syndrome().bits()),
            bits(&flips)
        );
    }

    let failed = MajorityVoteDecoder::new(code.n_data()).decode(&state.final_state(true));
    println!();
    println!("logical failure: {}", failed);
    Ok(())
}
