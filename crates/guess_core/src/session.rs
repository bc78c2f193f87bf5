//! The process-lifetime game session and its two transitions.

use std::cmp::Ordering;

use crate::error::GameError;
use crate::input::{parse_literal, LiteralError};
use crate::secret::SecretSource;

/// Smallest accepted upper bound for a round.
pub const MIN_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No secret is set: before the first round or after a win.
    Idle,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub secret: u32,
    pub attempts: u32,
    pub best: u32,
    pub new_best: bool,
}

/// Result of a guess that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The secret is bigger than the guess.
    Bigger { attempts: u32 },
    /// The secret is smaller than the guess.
    Smaller { attempts: u32 },
    Won(Win),
}

/// Mutable game state.
///
/// `secret` is `Some` exactly while a round is active. `limit` and `best`
/// survive a win; `attempts` is reset only by starting a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    limit: u32,
    secret: Option<u32>,
    attempts: u32,
    best: Option<u32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn secret(&self) -> Option<u32> {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn phase(&self) -> Phase {
        if self.secret.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    /// Validates `raw_limit` and starts a new round, superseding any active one.
    ///
    /// Nothing is mutated when validation fails.
    pub fn start_round<S: SecretSource + ?Sized>(
        &mut self,
        raw_limit: &str,
        source: &mut S,
    ) -> Result<RoundStarted, GameError> {
        let limit = parse_literal(raw_limit).map_err(GameError::InvalidFormat)?;
        if limit < MIN_LIMIT {
            return Err(GameError::RangeTooSmall { limit });
        }

        let secret = source.draw(limit).clamp(1, limit);
        self.limit = limit;
        self.secret = Some(secret);
        self.attempts = 0;
        Ok(RoundStarted { limit })
    }

    /// Validates `raw_guess` against the active round and scores it.
    ///
    /// Rejected input never counts as an attempt.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<GuessOutcome, GameError> {
        let secret = self.secret.ok_or(GameError::NoActiveRound)?;
        let guess = match parse_literal(raw_guess) {
            Ok(guess) => guess,
            Err(LiteralError::NotANumber) => {
                return Err(GameError::InvalidFormat(LiteralError::NotANumber))
            }
            // A digit string past u32::MAX is a number, just not one in range.
            Err(LiteralError::Overflow) => {
                return Err(GameError::OutOfRange { limit: self.limit })
            }
        };
        if !(1..=self.limit).contains(&guess) {
            return Err(GameError::OutOfRange { limit: self.limit });
        }

        self.attempts = self.attempts.saturating_add(1);
        let outcome = match guess.cmp(&secret) {
            Ordering::Less => GuessOutcome::Bigger {
                attempts: self.attempts,
            },
            Ordering::Greater => GuessOutcome::Smaller {
                attempts: self.attempts,
            },
            Ordering::Equal => GuessOutcome::Won(self.finish_round(secret)),
        };
        Ok(outcome)
    }

    fn finish_round(&mut self, secret: u32) -> Win {
        let attempts = self.attempts;
        let new_best = self.best.map_or(true, |best| attempts < best);
        let best = if new_best {
            attempts
        } else {
            self.best.unwrap_or(attempts)
        };
        self.best = Some(best);
        self.secret = None;
        Win {
            secret,
            attempts,
            best,
            new_best,
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
