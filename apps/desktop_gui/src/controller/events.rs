//! Events raised by the window while drawing a frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// "Start" clicked or Enter pressed in the limit field.
    StartPressed,
    /// "Check" clicked or Enter pressed in the guess field.
    GuessSubmitted,
    DialogDismissed,
}

impl UiEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::StartPressed => "start_pressed",
            Self::GuessSubmitted => "guess_submitted",
            Self::DialogDismissed => "dialog_dismissed",
        }
    }
}
