//! Terminal majority-vote decoder.

/// Declares a logical failure when more than half the data qubits are flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorityVoteDecoder {
    n: usize,
}

impl MajorityVoteDecoder {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// True if a logical X error remains, i.e. `ones > floor(n / 2)`.
    pub fn decode(&self, errors: &[bool]) -> bool {
        let ones = errors.iter().filter(|&&b| b).count();
        ones > self.n / 2
    }
}
