//! Game rules: scoring, elimination, and turn order.
//!
//! These are free functions over `Session`. They mutate the session they
//! are given and nothing else; the controller decides when to snapshot.

pub mod scoring;
pub mod elimination;
pub mod turns;

pub use scoring::{apply_action, score_delta};
pub use elimination::{is_out_of_reach, recompute, remaining_potential};
pub use turns::{advance, next_active, select};
