use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random picks an encounter or shop needs.
///
/// Tests script the exact outcomes; the game draws from a seeded generator.
#[derive(Debug, Clone)]
pub enum SelectionRng {
    Scripted { outcomes: Vec<usize>, index: usize },
    Seeded(StdRng),
}

impl SelectionRng {
    /// Each pick consumes the next outcome, reduced modulo the choice count.
    /// The script wraps around when exhausted.
    pub fn new_for_test(outcomes: Vec<usize>) -> Self {
        SelectionRng::Scripted { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        SelectionRng::Seeded(StdRng::from_os_rng())
    }

    pub fn from_seed(seed: u64) -> Self {
        SelectionRng::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Picks an index in `0..len`, or `None` when there is nothing to pick.
    pub fn pick(&mut self, len: usize, reason: &str) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let choice = match self {
            SelectionRng::Scripted { outcomes, index } => {
                let outcome = match outcomes.len() {
                    0 => 0,
                    n => outcomes[*index % n],
                };
                *index += 1;
                outcome % len
            }
            SelectionRng::Seeded(rng) => rng.random_range(0..len),
        };
        tracing::trace!("[RNG] picked {} of {} for: {}", choice, len, reason);
        Some(choice)
    }

    /// Picks a value in `low..=high`.
    pub fn range_inclusive(&mut self, low: u32, high: u32, reason: &str) -> u32 {
        let span = high.saturating_sub(low) as usize + 1;
        low + self.pick(span, reason).unwrap_or(0) as u32
    }
}
