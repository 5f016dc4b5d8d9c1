//! Undo/redo history over full session snapshots.

pub mod manager;

pub use manager::History;
