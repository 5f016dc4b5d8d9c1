//! Game session controller.
//!
//! ```text
//!            start_session            end_session / reset
//!   Setup ─────────────────> Active ─────────────────────> Ended
//!     ^                      │  ^                            │
//!     │                      └──┘ ball actions, turns,       │
//!     │                           undo, redo                 │
//!     └──────────────── reset ───────────────────────────────┘
//! ```
//!
//! Every accepted state change inside `Active` commits exactly one history
//! snapshot. Rejected commands commit nothing and change nothing. The
//! controller takes `&mut self` for every command, which makes it the
//! single serialization point for a session.

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionOutcome, BallAction, BallId, Command, GameError, GameResult, PlayerId, Session, TableConfig,
};
use crate::history::History;
use crate::rules;
use crate::stats::{GameOutcome, MatchStats, StatsRow};

use super::view::TableView;

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game yet; waiting for names.
    Setup,
    /// A game is in progress.
    Active,
    /// The last game was ended and recorded.
    Ended,
}

/// Drives sessions and owns the stats store.
#[derive(Debug)]
pub struct GameController {
    config: TableConfig,
    phase: Phase,
    session: Option<Session>,
    history: History,
    stats: MatchStats,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Create a controller with default rules and empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create a controller with custom rules.
    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            session: None,
            history: History::new(),
            stats: MatchStats::new(),
        }
    }

    /// Use an existing stats store.
    #[must_use]
    pub fn with_stats(mut self, stats: MatchStats) -> Self {
        self.stats = stats;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The live session, if a game is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Hand the stats store back, e.g. to carry it into a new controller.
    #[must_use]
    pub fn into_stats(self) -> MatchStats {
        self.stats
    }

    /// Stats rows for names with any recorded result.
    #[must_use]
    pub fn stats_rows(&self) -> Vec<StatsRow> {
        self.stats.rows()
    }

    /// Table projection for rendering.
    #[must_use]
    pub fn view(&self) -> Option<TableView> {
        self.session
            .as_ref()
            .map(|session| TableView::new(session, &self.history))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.phase == Phase::Active && self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.phase == Phase::Active && self.history.can_redo()
    }

    // === Lifecycle ===

    /// Start a fresh session with 2-4 players (per config).
    ///
    /// Always begins from a full rack with player 0 to shoot and an empty
    /// history holding only the opening snapshot.
    pub fn start_session<S: AsRef<str>>(&mut self, names: &[S]) -> GameResult<&Session> {
        if self.phase == Phase::Active {
            return Err(GameError::SessionAlreadyActive);
        }
        let session = Session::new(names, self.config).map_err(|err| {
            log::warn!("Rejected session start: {}", err);
            err
        })?;

        log::info!("Session started with {} players", session.player_count());

        self.history.clear();
        self.history.commit(&session);
        self.phase = Phase::Active;
        Ok(&*self.session.insert(session))
    }

    /// End the running game, record it, and return the final state.
    pub fn end_session(&mut self) -> GameResult<Session> {
        if self.phase != Phase::Active {
            return Err(GameError::NoActiveSession);
        }
        let session = self.session.take().ok_or(GameError::NoActiveSession)?;
        Ok(self.finish(session))
    }

    /// End any running game (recording it) and return to setup.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            if self.phase == Phase::Active {
                self.finish(session);
            }
        }
        self.history.clear();
        self.phase = Phase::Setup;
    }

    fn finish(&mut self, mut session: Session) -> Session {
        session.started = false;

        match self.stats.record_game_end(&session) {
            Some(GameOutcome { game_number, winner, loser, .. }) => log::info!(
                "Game {} ended: winner {}, last {}",
                game_number,
                winner,
                loser.as_deref().unwrap_or("-")
            ),
            None => log::info!("Game ended with no players; nothing recorded"),
        }

        self.history.clear();
        self.phase = Phase::Ended;
        session
    }

    /// Clear the cross-game tallies.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        log::info!("Match statistics cleared");
    }

    // === Play ===

    /// Score a pocket or foul for the player at seat `player_index`.
    pub fn apply_ball_action(
        &mut self,
        player_index: usize,
        ball: BallId,
        action: BallAction,
    ) -> GameResult<ActionOutcome> {
        let session = active(self.phase, &mut self.session)?;
        let player = session.player_id(player_index)?;
        Self::score(session, &mut self.history, player, ball, action)
    }

    /// Pocket a ball for the player holding the turn.
    pub fn pocket_current(&mut self, ball: BallId) -> GameResult<ActionOutcome> {
        self.act_current(ball, BallAction::Pocket)
    }

    /// Foul a ball for the player holding the turn.
    pub fn foul_current(&mut self, ball: BallId) -> GameResult<ActionOutcome> {
        self.act_current(ball, BallAction::Foul)
    }

    /// Pass the turn to the next player still in contention.
    pub fn advance_turn(&mut self) -> GameResult<PlayerId> {
        let session = active(self.phase, &mut self.session)?;
        let previous = session.current_player();
        let next = rules::advance(session);
        if next == previous && session.all_eliminated() {
            log::debug!("All players eliminated; turn stays with {}", next);
        } else {
            log::debug!("Turn passes from {} to {}", previous, next);
        }
        self.history.commit(session);
        Ok(next)
    }

    /// Hand the turn to a specific player still in contention.
    pub fn select_player(&mut self, player_index: usize) -> GameResult<PlayerId> {
        let session = active(self.phase, &mut self.session)?;
        let player = session.player_id(player_index)?;
        rules::select(session, player).map_err(|err| {
            log::warn!("Rejected turn change: {}", err);
            err
        })?;
        log::debug!("Turn given to {}", player);
        self.history.commit(session);
        Ok(player)
    }

    /// Step back one snapshot. Returns false at the opening snapshot.
    pub fn undo(&mut self) -> GameResult<bool> {
        let session = active(self.phase, &mut self.session)?;
        let moved = self.history.undo(session);
        log::debug!("Undo (moved: {}, cursor: {:?})", moved, self.history.cursor());
        Ok(moved)
    }

    /// Step forward one snapshot. Returns false at the latest snapshot.
    pub fn redo(&mut self) -> GameResult<bool> {
        let session = active(self.phase, &mut self.session)?;
        let moved = self.history.redo(session);
        log::debug!("Redo (moved: {}, cursor: {:?})", moved, self.history.cursor());
        Ok(moved)
    }

    /// Run one command. Convenience for hosts that queue commands.
    pub fn execute(&mut self, command: Command) -> GameResult<()> {
        match command {
            Command::Start { names } => self.start_session(&names).map(|_| ()),
            Command::Ball { player, ball, action } => {
                self.apply_ball_action(player, ball, action).map(|_| ())
            }
            Command::CurrentBall { ball, action } => self.act_current(ball, action).map(|_| ()),
            Command::AdvanceTurn => self.advance_turn().map(|_| ()),
            Command::SelectPlayer { player } => self.select_player(player).map(|_| ()),
            Command::Undo => self.undo().map(|_| ()),
            Command::Redo => self.redo().map(|_| ()),
            Command::End => self.end_session().map(|_| ()),
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::ResetStats => {
                self.reset_stats();
                Ok(())
            }
        }
    }

    // === Internals ===

    fn act_current(&mut self, ball: BallId, action: BallAction) -> GameResult<ActionOutcome> {
        let session = active(self.phase, &mut self.session)?;
        let player = session.current_player();
        Self::score(session, &mut self.history, player, ball, action)
    }

    fn score(
        session: &mut Session,
        history: &mut History,
        player: PlayerId,
        ball: BallId,
        action: BallAction,
    ) -> GameResult<ActionOutcome> {
        let outcome = rules::apply_action(session, player, ball, action).map_err(|err| {
            log::warn!("Rejected {} of {} by {}: {}", action, ball, player, err);
            err
        })?;

        log::debug!(
            "{} {} {}: {:+} (score {})",
            player,
            action,
            ball,
            outcome.points,
            outcome.new_score
        );
        for eliminated in &outcome.newly_eliminated {
            log::debug!("{} eliminated", eliminated);
        }

        // The turn never rests on an eliminated player while anyone is left.
        let current = session.current_player();
        if session.player(current).eliminated {
            let next = rules::advance(session);
            if next != current {
                log::debug!("Turn passes from eliminated {} to {}", current, next);
            }
        }

        history.commit(session);
        Ok(outcome)
    }
}

/// The live session, if the controller is in `Active`.
fn active(phase: Phase, session: &mut Option<Session>) -> GameResult<&mut Session> {
    match (phase, session.as_mut()) {
        (Phase::Active, Some(session)) => Ok(session),
        _ => Err(GameError::NoActiveSession),
    }
}
