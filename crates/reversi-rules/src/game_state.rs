//! Game state management.
//!
//! This module provides the `GameState` struct which owns the live grid, the
//! side to move and a stack of checkpoints. Moves are applied through the
//! flip engine; undo restores the most recent checkpoint.

use tracing::debug;

use crate::cell::{Cell, Color};
use crate::coord::Coord;
use crate::error::{Result, RulesError};
use crate::flip;
use crate::grid::Grid;
use crate::outcome::Outcome;

/// A saved copy of the grid and the side to move.
///
/// Checkpoints are never modified after they are taken; they are only
/// read back by [`GameState::undo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    grid: Grid,
    turn: Color,
}

impl Checkpoint {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Color {
        self.turn
    }
}

/// Represents the state of a game in progress.
///
/// The game is over as soon as the side to move has no legal location. There
/// is no pass: a player who cannot move ends the game even if the opponent
/// still could.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current grid.
    grid: Grid,
    /// Which player's turn it is to move.
    turn: Color,
    /// Checkpoints, most recent last.
    history: Vec<Checkpoint>,
}

impl GameState {
    /// Creates a new game on a `dimension` x `dimension` grid.
    ///
    /// The grid starts with the four center pieces and Black to move.
    ///
    /// # Errors
    ///
    /// `RulesError::InvalidDimension` for an unsupported size.
    pub fn new(dimension: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(dimension)?, Color::Black))
    }

    /// Creates a game from an existing position with an empty history.
    pub fn from_grid(grid: Grid, turn: Color) -> Self {
        Self {
            grid,
            turn,
            history: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns which player's turn it is to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns `true` if the side to move may play at `coord`.
    pub fn is_legal_choice(&self, coord: Coord) -> bool {
        flip::is_legal_choice(&self.grid, coord, self.turn)
    }

    /// All legal locations for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        flip::legal_moves(&self.grid, self.turn)
    }

    /// Places a piece for the side to move, if the move is legal.
    ///
    /// Illegal and off-grid requests are ignored and leave the state
    /// untouched. Use [`GameState::try_apply_move`] to find out why a
    /// request was rejected.
    pub fn apply_move(&mut self, coord: Coord) {
        if let Err(err) = self.try_apply_move(coord) {
            debug!(%err, "ignoring move request");
        }
    }

    /// Places a piece for the side to move, flips every bracketed run and
    /// hands the turn to the opponent.
    ///
    /// Either all of this happens or nothing does.
    ///
    /// # Returns
    ///
    /// The number of pieces flipped.
    ///
    /// # Errors
    ///
    /// * `RulesError::OutOfRange` if `coord` is off the grid.
    /// * `RulesError::IllegalMove` if the location is occupied or brackets
    ///   nothing.
    pub fn try_apply_move(&mut self, coord: Coord) -> Result<u32> {
        self.grid.at(coord)?;
        if !self.is_legal_choice(coord) {
            return Err(RulesError::IllegalMove(coord));
        }

        let mover = self.turn;
        self.grid.set(coord, Cell::from(mover))?;
        let flipped = flip::flip(&mut self.grid, coord, mover);
        self.turn = mover.opposite();

        debug!(%coord, color = %mover, flipped, "move applied");
        Ok(flipped)
    }

    /// Pushes a copy of the current grid and turn onto the history.
    pub fn save_checkpoint(&mut self) {
        self.history.push(Checkpoint {
            grid: self.grid.clone(),
            turn: self.turn,
        });
        debug!(depth = self.history.len(), "checkpoint saved");
    }

    /// Restores the most recent checkpoint and removes it from the history.
    ///
    /// # Returns
    ///
    /// `true` if a checkpoint was restored, `false` if the history was empty
    /// (in which case nothing changes).
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(Checkpoint { grid, turn }) => {
                self.grid = grid;
                self.turn = turn;
                debug!(depth = self.history.len(), "checkpoint restored");
                true
            }
            None => false,
        }
    }

    /// Saved checkpoints, oldest first.
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.history
    }

    /// Returns `true` if the side to move has no legal location.
    pub fn is_game_over(&self) -> bool {
        !flip::has_legal_choices(&self.grid, self.turn)
    }

    /// Returns the piece count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)`.
    pub fn score(&self) -> (u32, u32) {
        self.grid.count_pieces()
    }

    /// Scores the current grid.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_grid(&self.grid)
    }
}
