//! Match statistics that persist across sessions.

pub mod recorder;

pub use recorder::{GameOutcome, MatchStats, StatsRow, WinLoss};
