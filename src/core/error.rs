//! Error taxonomy for the game core.
//!
//! Every failure is a synchronous return value. A rejected command leaves
//! the session and its history exactly as they were.

use thiserror::Error;

use super::ball::BallId;
use super::player::PlayerId;

/// Errors returned by game operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The ball has already been pocketed.
    #[error("{0} is no longer on the table")]
    InvalidBallState(BallId),

    /// The number does not name a ball on the table.
    #[error("no ball numbered {0}")]
    UnknownBall(u8),

    /// A session was requested with too few or too many players.
    #[error("a game needs {min}-{max} players, got {count}")]
    InvalidSessionSize { count: usize, min: usize, max: usize },

    /// The player index does not exist in this session.
    #[error("player index {index} out of range for {player_count} players")]
    PlayerOutOfRange { index: usize, player_count: usize },

    /// The player can no longer take the turn.
    #[error("{0} has been eliminated")]
    PlayerEliminated(PlayerId),

    /// The command needs an active session.
    #[error("no game in progress")]
    NoActiveSession,

    /// A session is already running; end or reset it first.
    #[error("a game is already in progress")]
    SessionAlreadyActive,
}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
