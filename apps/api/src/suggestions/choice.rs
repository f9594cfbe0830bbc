//! Choice sources for the two rules that vary their replacement wording.
//!
//! Production picks uniformly at random; a seeded source makes `analyze`
//! reproducible for a given document.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ChoiceSource: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngChoice;

impl ChoiceSource for ThreadRngChoice {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic uniform choice from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededChoice(StdRng);

impl SeededChoice {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl ChoiceSource for SeededChoice {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// Picks one entry of a non-empty pool. Out-of-range indices from a
/// misbehaving source are clamped to the last entry.
pub fn choose<'a>(source: &mut dyn ChoiceSource, pool: &[&'a str]) -> &'a str {
    let last = pool.len().saturating_sub(1);
    pool[source.pick(pool.len()).min(last)]
}
