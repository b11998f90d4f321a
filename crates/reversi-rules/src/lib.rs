//! Rules engine for Reversi on a square grid of any even size.
//!
//! The crate covers move legality, flipping, turn order, checkpoint-based
//! undo and end-of-game scoring. Rendering and input handling live in the
//! `cli` crate.

pub mod cell;
pub mod coord;
pub mod error;
pub mod flip;
pub mod game_state;
pub mod grid;
pub mod outcome;
pub mod perft;

pub use cell::{Cell, Color};
pub use coord::{Coord, CoordError, Direction};
pub use error::{Result, RulesError};
pub use game_state::{Checkpoint, GameState};
pub use grid::Grid;
pub use outcome::{Outcome, Verdict};
