use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait UniformIndex {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len : usize) -> usize;
}

/// Uniform indices backed by `rand`.
#[derive(Debug, Clone)]
pub struct RandIndex(StdRng);

impl RandIndex {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        RandIndex(StdRng::from_entropy())
    }

    /// Seeds deterministically, so the same seed replays the same draws.
    pub fn seeded(seed : u64) -> Self {
        RandIndex(StdRng::seed_from_u64(seed))
    }
}

impl UniformIndex for RandIndex {
    fn index(&mut self, len : usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when it runs out. Each value is reduced modulo the
/// requested length so it is always in range.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    values : Vec<usize>,
    next : usize,
}

impl SequenceIndex {
    pub fn new(values : Vec<usize>) -> Self {
        SequenceIndex { values, next : 0 }
    }
}

impl UniformIndex for SequenceIndex {
    fn index(&mut self, len : usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}
