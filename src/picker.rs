use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Chooses which search result the pipeline summarizes.
pub trait CandidatePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Always takes the top ranked result.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl CandidatePicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

/// Uniform choice over all returned results.
#[derive(Debug)]
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of picks
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        // rng state stays valid across a poisoned lock
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

/// Runtime selection between the two pickers, driven by configuration.
#[derive(Debug)]
pub enum Picker {
    First(FirstPicker),
    Random(RandomPicker),
}

impl CandidatePicker for Picker {
    fn pick(&self, len: usize) -> usize {
        match self {
            Picker::First(p) => p.pick(len),
            Picker::Random(p) => p.pick(len),
        }
    }
}
