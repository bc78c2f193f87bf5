//! UI layer for the desktop game: the single game window and its dialog.

pub mod app;

pub use app::GuessNumberApp;
