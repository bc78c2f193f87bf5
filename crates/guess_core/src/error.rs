use thiserror::Error;

use crate::input::LiteralError;
use crate::session::MIN_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    RangeTooSmall,
    OutOfRange,
    NoActiveRound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("input is not a non-negative integer: {0}")]
    InvalidFormat(LiteralError),
    #[error("limit {limit} is below the minimum of {}", MIN_LIMIT)]
    RangeTooSmall { limit: u32 },
    #[error("guess is outside 1..={limit}")]
    OutOfRange { limit: u32 },
    #[error("no round is active")]
    NoActiveRound,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::RangeTooSmall { .. } => ErrorKind::RangeTooSmall,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NoActiveRound => ErrorKind::NoActiveRound,
        }
    }
}
