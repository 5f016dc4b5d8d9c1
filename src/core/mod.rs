//! Core types: balls, players, configuration, actions, session state, errors.
//!
//! Everything here is plain data plus invariant-preserving constructors.
//! The rules that move a session forward live in `rules`.

pub mod ball;
pub mod player;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use ball::{full_rack, Ball, BallId, BALLS, BALL_COUNT, MAX_BALL, MIN_BALL};
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use config::TableConfig;
pub use action::{ActionOutcome, BallAction, Command};
pub use state::Session;
pub use error::{GameError, GameResult};
