//! Move-path enumeration for checking the move engine.

use crate::cell::{Cell, Color};
use crate::error::Result;
use crate::flip;
use crate::grid::Grid;

/// Executes a perft run starting from the initial position of a
/// `dimension` x `dimension` grid with Black to move.
///
/// # Arguments
///
/// * `dimension` - Grid size.
/// * `depth` - Number of plies to expand. A depth of `1` counts the
///   immediate legal moves.
///
/// # Returns
///
/// The number of move sequences of length `depth`. A position whose mover
/// has no legal location ends the game and counts as a single leaf.
pub fn perft_root(dimension: usize, depth: u32) -> Result<u64> {
    let grid = Grid::new(dimension)?;
    Ok(perft(&grid, Color::Black, depth))
}

/// Counts move sequences of length `depth` from `grid` with `turn` to move.
pub fn perft(grid: &Grid, turn: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = flip::legal_moves(grid, turn);
    if moves.is_empty() {
        return 1;
    }
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|coord| {
            let mut next = grid.clone();
            if let Ok(cell) = next.at_mut(coord) {
                *cell = Cell::from(turn);
            }
            flip::flip(&mut next, coord, turn);
            perft(&next, turn.opposite(), depth - 1)
        })
        .sum()
}
