//! View state of the window, changed only by applying controller effects.

use guess_core::effects::{INITIAL_BEST, INITIAL_STATUS};
use guess_core::{Dialog, Effect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub limit_input: String,
    pub guess_input: String,
    pub guess_enabled: bool,
    pub status: String,
    pub best: String,
    pub dialog: Option<Dialog>,
    /// One-shot request consumed by the next frame.
    pub focus_guess: bool,
}

impl ViewState {
    pub fn new(default_limit: u32) -> Self {
        Self {
            limit_input: default_limit.to_string(),
            guess_input: String::new(),
            guess_enabled: false,
            status: INITIAL_STATUS.to_string(),
            best: INITIAL_BEST.to_string(),
            dialog: None,
            focus_guess: false,
        }
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetGuessEnabled(enabled) => {
                self.guess_enabled = enabled;
                if !enabled {
                    self.focus_guess = false;
                }
            }
            Effect::SetStatus(text) => self.status = text,
            Effect::SetBest(text) => self.best = text,
            Effect::ShowDialog(dialog) => self.dialog = Some(dialog),
            Effect::ClearGuess => self.guess_input.clear(),
            Effect::FocusGuess => self.focus_guess = true,
        }
    }

    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}
