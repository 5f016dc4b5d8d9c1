//! # pocket-tally
//!
//! Score and turn engine for a multiplayer pocket-billiards game with
//! nonstandard scoring.
//!
//! ## Rules in brief
//!
//! - Balls 3 through 15 are on the table. Pocketing a ball scores its number.
//! - Ball 3 is special: pocketing it scores 6, fouling it costs 4.
//! - While ball 3 is on the table, any foul costs a flat 4. Once it is gone,
//!   a foul costs the fouled ball's number.
//! - Fouled balls stay on the table.
//! - A trailing player who could not catch the leader even by pocketing
//!   everything left is eliminated and skipped in the turn order.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not diffs**: every accepted command commits a full
//!    `Session` value to a linear undo/redo history. `im` persistent
//!    structures keep those snapshots cheap.
//!
//! 2. **Derived state stays derived**: `points_needed` and elimination are
//!    recomputed from scores and the table after every change.
//!
//! 3. **Explicit ownership**: cross-game statistics live in a `MatchStats`
//!    value owned by the `GameController`, not in global state.
//!
//! ## Modules
//!
//! - `core`: Balls, players, configuration, commands, session state, errors
//! - `rules`: Scoring, elimination, turn order
//! - `history`: Snapshot-based undo/redo
//! - `stats`: Win/loss tallies across games
//! - `session`: Lifecycle controller and read-only views
//!
//! ## Example
//!
//! ```
//! use pocket_tally::{BallAction, BallId, GameController};
//!
//! let mut game = GameController::new();
//! game.start_session(&["Ada", "Grace"]).unwrap();
//!
//! game.pocket_current(BallId::SPECIAL).unwrap();
//! game.advance_turn().unwrap();
//! game.apply_ball_action(1, BallId::new(5).unwrap(), BallAction::Foul).unwrap();
//!
//! let view = game.view().unwrap();
//! assert_eq!(view.players[0].score, 6);
//! assert_eq!(view.players[1].score, -5);
//!
//! game.undo().unwrap();
//! assert_eq!(game.view().unwrap().players[1].score, 0);
//! ```

pub mod core;
pub mod rules;
pub mod history;
pub mod stats;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionOutcome, Ball, BallAction, BallId, Command, GameError, GameResult, Player, PlayerId,
    PlayerMap, Session, TableConfig,
};

pub use crate::history::History;

pub use crate::stats::{GameOutcome, MatchStats, StatsRow, WinLoss};

pub use crate::session::{BallView, GameController, Phase, PlayerView, TableView};
