//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seat order is the order names were given at
//! session start and never changes during a session.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Score sheet for one seat: name, score, pocketed and fouled balls,
//! elimination flag.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::ball::BallId;

/// Largest table a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Player seat identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use pocket_tally::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pocket_tally::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::new(4, |_| 0);
/// scores[PlayerId::new(1)] += 6;
/// assert_eq!(scores[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Look up a player by raw index, if it exists.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<PlayerId> {
        (index < self.data.len()).then(|| PlayerId(index as u8))
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One player's score sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Unique only by convention within a session.
    pub name: String,

    /// Running score. No floor; fouls can push it negative.
    pub score: i32,

    /// Balls this player pocketed, in order.
    pub balls_pocketed: Vector<BallId>,

    /// Balls this player fouled, in order. The same ball can repeat.
    pub balls_fouled: Vector<BallId>,

    /// Set once the player can no longer catch the leader. Never cleared
    /// during forward play.
    pub eliminated: bool,

    /// Points behind the leader. Derived; recomputed after every change.
    pub points_needed: i32,
}

impl Player {
    /// Create a fresh score sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            balls_pocketed: Vector::new(),
            balls_fouled: Vector::new(),
            eliminated: false,
            points_needed: 0,
        }
    }

    /// Name a seat, falling back to `Player N` (1-based) for blank input.
    #[must_use]
    pub fn display_name(raw: &str, seat: PlayerId) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            format!("Player {}", seat.index() + 1)
        } else {
            trimmed.to_string()
        }
    }
}
