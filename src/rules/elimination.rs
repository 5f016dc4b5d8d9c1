//! Elimination evaluator.
//!
//! After every change, each player's `points_needed` is refreshed against
//! the leader. A trailing player whose deficit exceeds everything left on
//! the table is eliminated. Elimination only ever turns on here; undo is the
//! only way back.

use smallvec::SmallVec;

use crate::core::{PlayerId, Session};

/// Maximum points still obtainable by anyone.
#[must_use]
pub fn remaining_potential(session: &Session) -> i32 {
    session.remaining_value()
}

/// Check if a player at `score` can no longer reach `highest`.
#[must_use]
pub fn is_out_of_reach(score: i32, highest: i32, potential: i32) -> bool {
    score < highest && potential < highest - score
}

/// Refresh `points_needed` for every player and mark newly unreachable
/// players as eliminated.
///
/// Returns the players eliminated by this call.
pub fn recompute(session: &mut Session) -> SmallVec<[PlayerId; 4]> {
    let highest = session.highest_score();
    let potential = remaining_potential(session);
    let mut newly_eliminated = SmallVec::new();

    for (id, player) in session.players.iter_mut() {
        player.points_needed = (highest - player.score).max(0);

        if !player.eliminated && is_out_of_reach(player.score, highest, potential) {
            player.eliminated = true;
            newly_eliminated.push(id);
        }
    }

    newly_eliminated
}
