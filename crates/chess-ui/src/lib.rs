//! Interaction core for the chess application.
//!
//! Everything a presentation shell needs, with no rendering of its own:
//! - [`Selection`] turns two square clicks into a validated move attempt
//! - [`MoveHistory`] keeps the numbered white/black move pairs for display
//! - [`GameController`] owns the live game and wires clicks, resignation,
//!   new-game, and save/load together behind one API
//!
//! Shells stay thin: clicks go in, state snapshots come out.

mod controller;
mod history;
mod selection;

pub use controller::{GameController, LoadError};
pub use history::MoveHistory;
pub use selection::{ClickOutcome, Selection};
