//! Scoring rule engine.
//!
//! | ball    | action | points                                   | table       |
//! |---------|--------|------------------------------------------|-------------|
//! | special | pocket | +special pocket value (6)                | removed     |
//! | special | foul   | -special foul penalty (4)                | stays       |
//! | other n | pocket | +n                                       | removed     |
//! | other n | foul   | -4 while special on table, else -n       | stays       |

use crate::core::{
    ActionOutcome, Ball, BallAction, BallId, GameError, GameResult, PlayerId, Session, TableConfig,
};

use super::elimination;

/// Points a ball action is worth. Pure; does not touch any session.
#[must_use]
pub fn score_delta(
    config: &TableConfig,
    ball: BallId,
    action: BallAction,
    special_on_table: bool,
) -> i32 {
    let def = Ball::get(ball);
    match action {
        BallAction::Pocket => config.pocket_value(ball),
        BallAction::Foul if def.is_special || special_on_table => -config.special_foul_penalty,
        BallAction::Foul => -def.base_value,
    }
}

/// Apply a pocket or foul for `player` and re-evaluate elimination.
///
/// Fails with `InvalidBallState` if the ball has already been pocketed and
/// with `PlayerEliminated` if the player is out; the session is untouched
/// in both cases.
pub fn apply_action(
    session: &mut Session,
    player: PlayerId,
    ball: BallId,
    action: BallAction,
) -> GameResult<ActionOutcome> {
    if player.index() >= session.player_count() {
        return Err(GameError::PlayerOutOfRange {
            index: player.index(),
            player_count: session.player_count(),
        });
    }
    if session.player(player).eliminated {
        return Err(GameError::PlayerEliminated(player));
    }
    if !session.is_on_table(ball) {
        return Err(GameError::InvalidBallState(ball));
    }

    let points = score_delta(&session.config, ball, action, session.special_ball_on_table);

    let sheet = &mut session.players[player];
    sheet.score += points;
    match action {
        BallAction::Pocket => sheet.balls_pocketed.push_back(ball),
        BallAction::Foul => sheet.balls_fouled.push_back(ball),
    }
    let new_score = sheet.score;

    if action == BallAction::Pocket {
        session.remaining_balls.remove(&ball);
        if ball.is_special() {
            session.special_ball_on_table = false;
        }
    }

    let newly_eliminated = elimination::recompute(session);

    Ok(ActionOutcome {
        player,
        ball,
        action,
        points,
        new_score,
        newly_eliminated,
    })
}
