//! Actions and commands.
//!
//! A `BallAction` is what a player does to a ball. A `Command` is anything
//! the presentation layer can ask the controller to do; the controller
//! processes them one at a time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ball::BallId;
use super::player::PlayerId;

/// What happened to a ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallAction {
    /// Ball went down legally; it leaves the table.
    Pocket,
    /// Ball was fouled; it stays on the table.
    Foul,
}

impl std::fmt::Display for BallAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallAction::Pocket => write!(f, "pocket"),
            BallAction::Foul => write!(f, "foul"),
        }
    }
}

/// Result of a scored ball action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The player credited or penalised.
    pub player: PlayerId,

    pub ball: BallId,

    pub action: BallAction,

    /// Score delta applied (negative for fouls).
    pub points: i32,

    /// The player's score after the action.
    pub new_score: i32,

    /// Players whose elimination was triggered by this action.
    /// At most `player_count - 1`, so four inline slots cover every table.
    pub newly_eliminated: SmallVec<[PlayerId; 4]>,
}

/// A request from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Start a session with these names, in seat order.
    Start { names: Vec<String> },
    /// A specific player pockets or fouls a ball.
    Ball {
        player: usize,
        ball: BallId,
        action: BallAction,
    },
    /// The current player pockets or fouls a ball.
    CurrentBall { ball: BallId, action: BallAction },
    /// Move the turn to the next non-eliminated player.
    AdvanceTurn,
    /// Hand the turn to a specific player.
    SelectPlayer { player: usize },
    Undo,
    Redo,
    /// End the game and record the result.
    End,
    /// End any running game and go back to setup.
    Reset,
    /// Clear the cross-game win/loss tallies.
    ResetStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_action_display() {
        assert_eq!(BallAction::Pocket.to_string(), "pocket");
        assert_eq!(BallAction::Foul.to_string(), "foul");
    }

    #[test]
    fn test_command_json() {
        let json = r#"{ "type": "ball", "player": 1, "ball": 9, "action": "foul" }"#;
        let command: Command = serde_json::from_str(json).unwrap();

        assert_eq!(
            command,
            Command::Ball {
                player: 1,
                ball: BallId::new(9).unwrap(),
                action: BallAction::Foul,
            }
        );
    }

    #[test]
    fn test_command_json_rejects_unknown_ball() {
        let json = r#"{ "type": "current_ball", "ball": 1, "action": "pocket" }"#;
        assert!(serde_json::from_str::<Command>(json).is_err());
    }

    #[test]
    fn test_unit_command_json() {
        let command: Command = serde_json::from_str(r#"{ "type": "advance_turn" }"#).unwrap();
        assert_eq!(command, Command::AdvanceTurn);
    }
}
