//! Game session state and controller for the number-guessing game.
//!
//! UI shells hold a [`GameController`], feed it raw text from their input
//! fields and render the [`Effect`]s it returns.

pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod input;
pub mod secret;
pub mod session;
pub mod telemetry;

pub use config::{load_settings, ConfigError, ConfigOverrides, Settings};
pub use controller::GameController;
pub use effects::{Dialog, DialogLevel, Effect};
pub use error::{ErrorKind, GameError};
pub use input::{parse_literal, LiteralError};
pub use secret::{
    secret_source_for, FixedSecretSource, SecretSource, SeededSecretSource, ThreadSecretSource,
};
pub use session::{GuessOutcome, Phase, RoundStarted, Session, Win, MIN_LIMIT};
