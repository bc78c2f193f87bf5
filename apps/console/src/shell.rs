//! Line-oriented front end over the game controller.

use std::io::{self, Write};

use guess_core::{Effect, GameController, SecretSource};

pub const HELP: &str = "commands:
  start [limit]   pick a new number from 1 to limit (default limit when omitted)
  guess <n>       submit a guess (a bare number works too)
  help            show this text
  quit            leave the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Option<String>),
    Guess(String),
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "start" | "s" if rest.is_empty() => Command::Start(None),
        "start" | "s" => Command::Start(Some(rest.to_string())),
        "guess" | "g" => Command::Guess(rest.to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        // Anything else goes to the controller verbatim so it can judge the text.
        _ => Command::Guess(line.to_string()),
    }
}

pub struct ConsoleShell<S> {
    game: GameController<S>,
    default_limit: u32,
    guess_enabled: bool,
}

impl<S: SecretSource> ConsoleShell<S> {
    pub fn new(source: S, default_limit: u32) -> Self {
        Self {
            game: GameController::new(source),
            default_limit,
            guess_enabled: false,
        }
    }

    pub fn game(&self) -> &GameController<S> {
        &self.game
    }

    pub fn prompt(&self) -> &'static str {
        if self.guess_enabled {
            "guess> "
        } else {
            "> "
        }
    }

    /// Handles one input line. Returns `Ok(false)` once the user asked to quit.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let effects = match parse_command(line) {
            Command::Empty => return Ok(true),
            Command::Quit => return Ok(false),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Start(limit) => {
                let raw_limit = limit.unwrap_or_else(|| self.default_limit.to_string());
                self.game.start_round(&raw_limit)
            }
            Command::Guess(raw_guess) => self.game.submit_guess(&raw_guess),
        };
        self.render(effects, out)?;
        Ok(true)
    }

    fn render(&mut self, effects: Vec<Effect>, out: &mut impl Write) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::SetGuessEnabled(enabled) => self.guess_enabled = enabled,
                Effect::SetStatus(text) | Effect::SetBest(text) => writeln!(out, "{text}")?,
                Effect::ShowDialog(dialog) => writeln!(
                    out,
                    "[{}] {}: {}",
                    dialog.level, dialog.title, dialog.message
                )?,
                Effect::ClearGuess | Effect::FocusGuess => {}
            }
        }
        Ok(())
    }
}
