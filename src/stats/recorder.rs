//! Cross-game win/loss tallies.
//!
//! `MatchStats` outlives sessions. It is keyed by display name, so two
//! sessions with a player called "Ada" add to the same row. Rows keep the
//! order in which names were first seen.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Session;

/// Wins and losses for one name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    /// Check if this name has any recorded result.
    #[must_use]
    pub fn has_history(&self) -> bool {
        self.wins > 0 || self.losses > 0
    }
}

/// A display row for the stats table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// 1-based count of games recorded since the last reset.
    pub game_number: usize,

    pub winner: String,

    /// `None` when the game had a single player.
    pub loser: Option<String>,

    /// Final (name, score) pairs in seat order.
    pub final_scores: Vec<(String, i32)>,
}

/// Process-wide tallies, owned by whoever drives sessions.
#[derive(Clone, Debug, Default)]
pub struct MatchStats {
    /// name -> index into `records`
    index: FxHashMap<String, usize>,

    records: Vec<(String, WinLoss)>,

    outcomes: Vec<GameOutcome>,
}

impl MatchStats {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a name's tally.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<WinLoss> {
        self.index.get(name).map(|&i| self.records[i].1)
    }

    /// Rows for every name with at least one win or loss.
    #[must_use]
    pub fn rows(&self) -> Vec<StatsRow> {
        self.records
            .iter()
            .filter(|(_, record)| record.has_history())
            .map(|(name, record)| StatsRow {
                name: name.clone(),
                wins: record.wins,
                losses: record.losses,
            })
            .collect()
    }

    /// Every recorded game, oldest first.
    #[must_use]
    pub fn outcomes(&self) -> &[GameOutcome] {
        &self.outcomes
    }

    /// Number of games recorded since the last reset.
    #[must_use]
    pub fn games_recorded(&self) -> usize {
        self.outcomes.len()
    }

    /// Record the result of a finished session.
    ///
    /// Players are ranked by score, highest first; ties keep seat order, so
    /// the first-seated of tied leaders wins and the last-seated of tied
    /// trailers loses. A single-player session records a win only.
    /// Returns `None` without touching the tallies if there are no players.
    pub fn record_game_end(&mut self, session: &Session) -> Option<GameOutcome> {
        let mut ranked: Vec<_> = session.players().values().collect();
        if ranked.is_empty() {
            return None;
        }
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let winner = ranked[0].name.clone();
        let loser = (ranked.len() > 1).then(|| ranked[ranked.len() - 1].name.clone());

        self.entry(&winner).wins += 1;
        if let Some(loser) = &loser {
            self.entry(loser).losses += 1;
        }

        let outcome = GameOutcome {
            game_number: self.outcomes.len() + 1,
            winner,
            loser,
            final_scores: session
                .players()
                .values()
                .map(|p| (p.name.clone(), p.score))
                .collect(),
        };
        self.outcomes.push(outcome.clone());
        Some(outcome)
    }

    /// Clear all tallies and the result log.
    pub fn reset(&mut self) {
        self.index.clear();
        self.records.clear();
        self.outcomes.clear();
    }

    fn entry(&mut self, name: &str) -> &mut WinLoss {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.records.push((name.to_string(), WinLoss::default()));
                self.index.insert(name.to_string(), self.records.len() - 1);
                self.records.len() - 1
            }
        };
        &mut self.records[i].1
    }
}
