//! Session state.
//!
//! A `Session` is everything undo/redo needs to restore: players, the turn
//! pointer, the balls still on the table, and the special-ball flag.
//!
//! Ball sets and per-player ball lists are `im` persistent structures, so
//! cloning a session for a history snapshot shares structure instead of
//! copying it. A clone is still a fully independent value: mutating the
//! live session never changes a stored snapshot.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::ball::{full_rack, BallId};
use super::config::TableConfig;
use super::error::{GameError, GameResult};
use super::player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};

/// Live state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) config: TableConfig,

    pub(crate) players: PlayerMap<Player>,

    /// Points at a non-eliminated player unless every player is eliminated.
    pub(crate) current_player: PlayerId,

    /// Only shrinks during forward play.
    pub(crate) remaining_balls: OrdSet<BallId>,

    /// True until the special ball is pocketed.
    pub(crate) special_ball_on_table: bool,

    pub(crate) started: bool,
}

impl Session {
    /// Create a started session with a full rack and player 0 to shoot.
    ///
    /// Blank names become `Player N`. Fails without side effects if the
    /// player count is outside the configured range or outside
    /// `1..=MAX_PLAYERS`, whatever the config says.
    pub fn new<S: AsRef<str>>(names: &[S], config: TableConfig) -> GameResult<Self> {
        let count = names.len();
        if count == 0 || count > MAX_PLAYERS || !config.allows_player_count(count) {
            return Err(GameError::InvalidSessionSize {
                count,
                min: config.min_players,
                max: config.max_players,
            });
        }

        let players = PlayerMap::new(names.len(), |seat| {
            Player::new(Player::display_name(names[seat.index()].as_ref(), seat))
        });

        Ok(Self {
            config,
            players,
            current_player: PlayerId::new(0),
            remaining_balls: full_rack(),
            special_ball_on_table: true,
            started: true,
        })
    }

    /// Get the table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Get a player's score sheet.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Resolve a raw seat index.
    pub fn player_id(&self, index: usize) -> GameResult<PlayerId> {
        self.players.id_at(index).ok_or(GameError::PlayerOutOfRange {
            index,
            player_count: self.player_count(),
        })
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Balls still on the table, in ascending order.
    #[must_use]
    pub fn remaining_balls(&self) -> &OrdSet<BallId> {
        &self.remaining_balls
    }

    /// Check if a ball is still on the table.
    #[must_use]
    pub fn is_on_table(&self, ball: BallId) -> bool {
        self.remaining_balls.contains(&ball)
    }

    #[must_use]
    pub fn special_ball_on_table(&self) -> bool {
        self.special_ball_on_table
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Sum of pocket values still on the table: the most anyone can still
    /// score.
    #[must_use]
    pub fn remaining_value(&self) -> i32 {
        self.remaining_balls
            .iter()
            .map(|&ball| self.config.pocket_value(ball))
            .sum()
    }

    /// Highest score at the table.
    #[must_use]
    pub fn highest_score(&self) -> i32 {
        self.players.values().map(|p| p.score).max().unwrap_or(0)
    }

    /// Check if every player has been eliminated.
    #[must_use]
    pub fn all_eliminated(&self) -> bool {
        self.players.values().all(|p| p.eliminated)
    }

    /// Number of players still in contention.
    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.players.values().filter(|p| !p.eliminated).count()
    }
}
