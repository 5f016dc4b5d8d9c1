//! Table configuration.
//!
//! The ball set is fixed by the registry. What a host can tune is the
//! allowed player count and the special ball's weight.

use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId};
use super::player::MAX_PLAYERS;

/// Rules and limits for a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Fewest players a session can start with (default: 2).
    pub min_players: usize,

    /// Most players a session can start with (default: 4).
    pub max_players: usize,

    /// Points for pocketing the special ball (default: 6).
    pub special_pocket_value: i32,

    /// Points lost for fouling the special ball, or any ball while the
    /// special ball is still on the table (default: 4).
    pub special_foul_penalty: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            special_pocket_value: 6,
            special_foul_penalty: 4,
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed player range (inclusive).
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min > 0, "Must have at least 1 player");
        assert!(min <= max, "min_players must not exceed max_players");
        assert!(max <= MAX_PLAYERS, "At most 255 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the special ball's pocket value.
    #[must_use]
    pub fn with_special_pocket_value(mut self, value: i32) -> Self {
        self.special_pocket_value = value;
        self
    }

    /// Set the flat foul penalty tied to the special ball.
    #[must_use]
    pub fn with_special_foul_penalty(mut self, penalty: i32) -> Self {
        self.special_foul_penalty = penalty;
        self
    }

    /// Check if `count` players may start a session.
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }

    /// Points a ball is worth when pocketed.
    #[must_use]
    pub fn pocket_value(&self, ball: BallId) -> i32 {
        let def = Ball::get(ball);
        if def.is_special {
            self.special_pocket_value
        } else {
            def.base_value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();

        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 4);
        assert_eq!(config.special_pocket_value, 6);
        assert_eq!(config.special_foul_penalty, 4);
    }

    #[test]
    fn test_pocket_value() {
        let config = TableConfig::default();

        assert_eq!(config.pocket_value(BallId::SPECIAL), 6);
        assert_eq!(config.pocket_value(BallId::new(4).unwrap()), 4);
        assert_eq!(config.pocket_value(BallId::new(15).unwrap()), 15);
    }

    #[test]
    fn test_allows_player_count() {
        let config = TableConfig::default();

        assert!(!config.allows_player_count(1));
        assert!(config.allows_player_count(2));
        assert!(config.allows_player_count(4));
        assert!(!config.allows_player_count(5));
    }

    #[test]
    fn test_builder() {
        let config = TableConfig::new()
            .with_player_range(2, 6)
            .with_special_pocket_value(8)
            .with_special_foul_penalty(5);

        assert!(config.allows_player_count(6));
        assert_eq!(config.pocket_value(BallId::SPECIAL), 8);
        assert_eq!(config.special_foul_penalty, 5);
    }

    #[test]
    #[should_panic(expected = "min_players must not exceed max_players")]
    fn test_inverted_range() {
        let _ = TableConfig::new().with_player_range(4, 2);
    }

    #[test]
    fn test_partial_json() {
        let config: TableConfig = serde_json::from_str(r#"{ "max_players": 3 }"#).unwrap();

        assert_eq!(config.max_players, 3);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.special_pocket_value, 6);
    }
}
