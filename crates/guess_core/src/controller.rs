//! Game session controller: the two operations a UI shell may invoke.

use tracing::{debug, info, trace};

use crate::effects::{best_text, Dialog, DialogLevel, Effect};
use crate::error::GameError;
use crate::input::LiteralError;
use crate::secret::{SecretSource, ThreadSecretSource};
use crate::session::{GuessOutcome, RoundStarted, Session, Win};

/// Owns the [`Session`] and the secret source, and turns each operation into
/// the list of effects the shell has to render.
pub struct GameController<S = ThreadSecretSource> {
    session: Session,
    source: S,
}

impl<S: SecretSource> GameController<S> {
    pub fn new(source: S) -> Self {
        Self {
            session: Session::new(),
            source,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn start_round(&mut self, raw_limit: &str) -> Vec<Effect> {
        match self.session.start_round(raw_limit, &mut self.source) {
            Ok(RoundStarted { limit }) => {
                info!(limit, "round started");
                trace!(secret = ?self.session.secret(), "secret drawn");
                vec![
                    Effect::SetGuessEnabled(true),
                    Effect::ClearGuess,
                    Effect::FocusGuess,
                    Effect::SetStatus(format!(
                        "A number from 1 to {limit} has been chosen. Guess it!"
                    )),
                ]
            }
            Err(err) => {
                debug!(kind = ?err.kind(), %err, "limit rejected");
                vec![Effect::ShowDialog(limit_error_dialog(&err))]
            }
        }
    }

    pub fn submit_guess(&mut self, raw_guess: &str) -> Vec<Effect> {
        match self.session.submit_guess(raw_guess) {
            Ok(GuessOutcome::Bigger { attempts }) => {
                debug!(attempts, "guess too small");
                vec![
                    Effect::ClearGuess,
                    Effect::FocusGuess,
                    Effect::SetStatus("My number is bigger.".to_string()),
                ]
            }
            Ok(GuessOutcome::Smaller { attempts }) => {
                debug!(attempts, "guess too big");
                vec![
                    Effect::ClearGuess,
                    Effect::FocusGuess,
                    Effect::SetStatus("My number is smaller.".to_string()),
                ]
            }
            Ok(GuessOutcome::Won(win)) => {
                info!(
                    attempts = win.attempts,
                    best = win.best,
                    new_best = win.new_best,
                    "round won"
                );
                win_effects(&win)
            }
            Err(err) => {
                debug!(kind = ?err.kind(), %err, "guess rejected");
                guess_error_effects(&err)
            }
        }
    }
}

fn win_effects(win: &Win) -> Vec<Effect> {
    vec![
        Effect::ClearGuess,
        Effect::ShowDialog(Dialog::new(
            DialogLevel::Info,
            "You won!",
            format!(
                "Correct! The number was {}. Attempts: {}.",
                win.secret, win.attempts
            ),
        )),
        Effect::SetBest(best_text(Some(win.best))),
        Effect::SetStatus("Press \"Start\" to play again.".to_string()),
        Effect::SetGuessEnabled(false),
    ]
}

fn limit_error_dialog(err: &GameError) -> Dialog {
    match err {
        GameError::InvalidFormat(LiteralError::Overflow) => {
            Dialog::new(DialogLevel::Error, "Error", "Incorrect number. Try again.")
        }
        GameError::InvalidFormat(LiteralError::NotANumber) => Dialog::new(
            DialogLevel::Warning,
            "Error",
            "Enter a whole number (at least 10).",
        ),
        GameError::RangeTooSmall { .. } => Dialog::new(
            DialogLevel::Warning,
            "Error",
            "The range must be at least 10.",
        ),
        other => Dialog::new(DialogLevel::Error, "Error", other.to_string()),
    }
}

// Guess-field problems stay inline and keep the field focused; only a missing
// round interrupts with a dialog.
fn guess_error_effects(err: &GameError) -> Vec<Effect> {
    let status = match err {
        GameError::NoActiveRound => {
            return vec![Effect::ShowDialog(Dialog::new(
                DialogLevel::Info,
                "Game not started",
                "Press \"Start\" first.",
            ))]
        }
        GameError::InvalidFormat(_) => "Enter a number.".to_string(),
        GameError::OutOfRange { limit } => format!("Enter a number from 1 to {limit}."),
        other => other.to_string(),
    };
    vec![Effect::FocusGuess, Effect::SetStatus(status)]
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
