//! Read-only projections for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{Ball, PlayerId, Session};
use crate::history::History;

/// One player card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    pub points_needed: i32,
    pub eliminated: bool,
    /// Holds the turn.
    pub is_current: bool,
    /// Level with the top score and still in contention.
    pub is_leading: bool,
    pub balls_pocketed: Vec<u8>,
    pub balls_fouled: Vec<u8>,
}

/// One ball button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallView {
    pub number: u8,
    pub pocket_value: i32,
    pub on_table: bool,
}

/// Everything the table screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    /// Sum of pocket values still on the table.
    pub remaining_value: i32,
    pub special_ball_on_table: bool,
    pub balls: Vec<BallView>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl TableView {
    /// Project a session and its history.
    #[must_use]
    pub fn new(session: &Session, history: &History) -> Self {
        let highest = session.highest_score();

        let players = session
            .players()
            .iter()
            .map(|(id, p)| PlayerView {
                id,
                name: p.name.clone(),
                score: p.score,
                points_needed: p.points_needed,
                eliminated: p.eliminated,
                is_current: id == session.current_player(),
                is_leading: p.score == highest && !p.eliminated,
                balls_pocketed: p.balls_pocketed.iter().map(|b| b.number()).collect(),
                balls_fouled: p.balls_fouled.iter().map(|b| b.number()).collect(),
            })
            .collect();

        let balls = Ball::all()
            .iter()
            .map(|ball| BallView {
                number: ball.id.number(),
                pocket_value: session.config().pocket_value(ball.id),
                on_table: session.is_on_table(ball.id),
            })
            .collect();

        Self {
            players,
            current_player: session.current_player(),
            remaining_value: session.remaining_value(),
            special_ball_on_table: session.special_ball_on_table(),
            balls,
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
        }
    }

    /// The card for the player holding the turn.
    #[must_use]
    pub fn current(&self) -> &PlayerView {
        &self.players[self.current_player.index()]
    }
}
