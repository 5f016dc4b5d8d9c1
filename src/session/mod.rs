//! Session lifecycle and read-only projections.

pub mod controller;
pub mod view;

pub use controller::{GameController, Phase};
pub use view::{BallView, PlayerView, TableView};
