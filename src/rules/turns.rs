//! Turn sequencer.

use crate::core::{GameError, GameResult, PlayerId, Session};

/// Next non-eliminated seat after `from`, searching one full lap.
///
/// A lap ends back at `from`, so the current player is returned when
/// everyone else is out. Returns `None` if every player is eliminated.
#[must_use]
pub fn next_active(session: &Session, from: PlayerId) -> Option<PlayerId> {
    let count = session.player_count();
    let mut seat = from;
    for _ in 0..count {
        seat = seat.next(count);
        if !session.player(seat).eliminated {
            return Some(seat);
        }
    }
    None
}

/// Pass the turn to the next non-eliminated player.
///
/// If every player is eliminated the turn pointer is left unchanged.
/// Returns the player now holding the turn.
pub fn advance(session: &mut Session) -> PlayerId {
    if let Some(next) = next_active(session, session.current_player) {
        session.current_player = next;
    }
    session.current_player
}

/// Hand the turn to a specific player.
pub fn select(session: &mut Session, player: PlayerId) -> GameResult<()> {
    if player.index() >= session.player_count() {
        return Err(GameError::PlayerOutOfRange {
            index: player.index(),
            player_count: session.player_count(),
        });
    }
    if session.player(player).eliminated {
        return Err(GameError::PlayerEliminated(player));
    }
    session.current_player = player;
    Ok(())
}
