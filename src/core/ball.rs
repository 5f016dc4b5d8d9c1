//! Ball registry: static ball identities and point values.
//!
//! The table holds thirteen numbered balls, 3 through 15. Ball 3 is the
//! *special* ball: it pays more when pocketed and, while it is still on the
//! table, every foul costs a flat penalty instead of the fouled ball's value.
//!
//! ## Usage
//!
//! ```
//! use pocket_tally::core::{Ball, BallId};
//!
//! let three = BallId::SPECIAL;
//! assert!(Ball::get(three).is_special);
//!
//! let nine = BallId::new(9).unwrap();
//! assert_eq!(Ball::get(nine).base_value, 9);
//!
//! assert!(BallId::new(2).is_none());
//! ```

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Lowest ball number on the table.
pub const MIN_BALL: u8 = 3;

/// Highest ball number on the table.
pub const MAX_BALL: u8 = 15;

/// Number of balls in a full rack.
pub const BALL_COUNT: usize = (MAX_BALL - MIN_BALL + 1) as usize;

/// Identity of a ball on the table (3..=15).
///
/// Construction is checked, so a `BallId` always names a registry ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BallId(u8);

impl BallId {
    /// The special ball (number 3).
    pub const SPECIAL: BallId = BallId(MIN_BALL);

    /// Create a ball ID, or `None` if `number` is not on the table.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= MIN_BALL && number <= MAX_BALL {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the ball number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Check if this is the special ball.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.0 == MIN_BALL
    }

    /// Iterate over every ball in registry order.
    pub fn all() -> impl Iterator<Item = BallId> {
        (MIN_BALL..=MAX_BALL).map(BallId)
    }
}

impl TryFrom<u8> for BallId {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        BallId::new(number).ok_or(GameError::UnknownBall(number))
    }
}

impl From<BallId> for u8 {
    fn from(ball: BallId) -> Self {
        ball.0
    }
}

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ball {}", self.0)
    }
}

/// Static definition of a ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub id: BallId,

    /// Only ball 3 is special.
    pub is_special: bool,

    /// The printed number. The special ball's pocket value is configured
    /// separately (see `TableConfig::pocket_value`).
    pub base_value: i32,
}

const fn ball(number: u8) -> Ball {
    Ball {
        id: BallId(number),
        is_special: number == MIN_BALL,
        base_value: number as i32,
    }
}

/// The full rack in registry order.
pub static BALLS: [Ball; BALL_COUNT] = [
    ball(3),
    ball(4),
    ball(5),
    ball(6),
    ball(7),
    ball(8),
    ball(9),
    ball(10),
    ball(11),
    ball(12),
    ball(13),
    ball(14),
    ball(15),
];

impl Ball {
    /// Look up a ball definition.
    #[must_use]
    pub fn get(id: BallId) -> &'static Ball {
        &BALLS[(id.0 - MIN_BALL) as usize]
    }

    /// All ball definitions.
    #[must_use]
    pub fn all() -> &'static [Ball] {
        &BALLS
    }
}

/// A freshly racked table: every ball from 3 to 15.
#[must_use]
pub fn full_rack() -> OrdSet<BallId> {
    BallId::all().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_id_range() {
        assert!(BallId::new(2).is_none());
        assert!(BallId::new(16).is_none());
        assert_eq!(BallId::new(3), Some(BallId::SPECIAL));
        assert_eq!(BallId::new(15).map(BallId::number), Some(15));
    }

    #[test]
    fn test_ball_id_try_from() {
        assert_eq!(BallId::try_from(7u8).unwrap().number(), 7);
        assert_eq!(BallId::try_from(1u8), Err(GameError::UnknownBall(1)));
    }

    #[test]
    fn test_registry_lookup() {
        for id in BallId::all() {
            let def = Ball::get(id);
            assert_eq!(def.id, id);
            assert_eq!(def.base_value, id.number() as i32);
            assert_eq!(def.is_special, id == BallId::SPECIAL);
        }
    }

    #[test]
    fn test_only_one_special_ball() {
        assert_eq!(Ball::all().iter().filter(|b| b.is_special).count(), 1);
    }

    #[test]
    fn test_full_rack() {
        let rack = full_rack();
        assert_eq!(rack.len(), BALL_COUNT);
        assert_eq!(rack.get_min(), Some(&BallId::SPECIAL));
        assert_eq!(rack.get_max().map(|b| b.number()), Some(15));
    }

    #[test]
    fn test_ball_id_serialization() {
        let ball = BallId::new(12).unwrap();
        let json = serde_json::to_string(&ball).unwrap();
        assert_eq!(json, "12");

        let back: BallId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ball);

        assert!(serde_json::from_str::<BallId>("99").is_err());
    }
}
