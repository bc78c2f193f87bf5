//! Display instructions from the controller to a UI shell.

use std::fmt;

pub const INITIAL_STATUS: &str = "Press \"Start\" to begin.";
pub const INITIAL_BEST: &str = "Best: none yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

impl DialogLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DialogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(level: DialogLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Enables or disables the guess field together with its submit action.
    SetGuessEnabled(bool),
    SetStatus(String),
    SetBest(String),
    ShowDialog(Dialog),
    ClearGuess,
    FocusGuess,
}

pub fn best_text(best: Option<u32>) -> String {
    match best {
        Some(best) => format!("Best: {best} attempts"),
        None => INITIAL_BEST.to_string(),
    }
}
