//! Sources for the secret number of a round.
//!
//! - [`ThreadSecretSource`]: process-seeded generator, the default for play
//! - [`SeededSecretSource`]: reproducible sequence from a configured seed
//! - [`FixedSecretSource`]: scripted secrets for tests and scripted play

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draws the secret for a new round.
///
/// Implementations must return a value in `1..=limit`; callers only pass
/// limits that already passed validation.
pub trait SecretSource {
    fn draw(&mut self, limit: u32) -> u32;
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn draw(&mut self, limit: u32) -> u32 {
        (**self).draw(limit)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSecretSource;

impl SecretSource for ThreadSecretSource {
    fn draw(&mut self, limit: u32) -> u32 {
        rand::rng().random_range(1..=limit.max(1))
    }
}

#[derive(Debug, Clone)]
pub struct SeededSecretSource {
    rng: StdRng,
}

impl SeededSecretSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for SeededSecretSource {
    fn draw(&mut self, limit: u32) -> u32 {
        self.rng.random_range(1..=limit.max(1))
    }
}

/// Hands out scripted secrets in order and keeps repeating the last one once
/// the script runs out. Values are clamped into `1..=limit`.
#[derive(Debug, Clone)]
pub struct FixedSecretSource {
    script: VecDeque<u32>,
    last: u32,
}

impl FixedSecretSource {
    pub fn new(secrets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: secrets.into_iter().collect(),
            last: 1,
        }
    }

    pub fn always(secret: u32) -> Self {
        Self::new([secret])
    }
}

impl SecretSource for FixedSecretSource {
    fn draw(&mut self, limit: u32) -> u32 {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last.clamp(1, limit.max(1))
    }
}

/// Picks the source for a shell: seeded when a seed is configured, otherwise
/// the thread-local generator.
pub fn secret_source_for(seed: Option<u64>) -> Box<dyn SecretSource> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded secret source");
            Box::new(SeededSecretSource::new(seed))
        }
        None => Box::new(ThreadSecretSource),
    }
}
