//! Move legality and disc flipping.
//!
//! Both operations walk outward from the target cell in each of the eight
//! compass directions. A direction *brackets* when the walk crosses at least
//! one piece of the opposite color and then lands on a piece of the acting
//! color, with no empty cell or grid edge in between.

use tracing::trace;

use crate::cell::{Cell, Color};
use crate::coord::{Coord, Direction};
use crate::grid::Grid;

/// Walks from `start` towards `dir` and returns the length of the bracketed
/// run of opposite-colored pieces, or 0 if the direction does not bracket.
///
/// Only the non-failing grid queries are used, so speculative locations past
/// the edge are never dereferenced.
#[inline]
fn bracket_len(grid: &Grid, start: Coord, color: Color, dir: Direction) -> usize {
    let mut run = 0;
    let mut cursor = start.step(dir);
    while let Some(c) = cursor.filter(|&c| grid.is_opposite_color(c, color)) {
        run += 1;
        cursor = c.step(dir);
    }

    let found_same = cursor.is_some_and(|c| grid.is_same_color(c, color));
    if run > 0 && found_same { run } else { 0 }
}

/// Returns `true` if `color` may place a piece at `coord`.
///
/// The target must be on the grid and empty, and at least one direction must
/// bracket a run of opposite-colored pieces.
pub fn is_legal_choice(grid: &Grid, coord: Coord, color: Color) -> bool {
    if !grid.at(coord).is_ok_and(Cell::is_empty) {
        return false;
    }

    Direction::ALL
        .iter()
        .any(|&dir| bracket_len(grid, coord, color, dir) > 0)
}

/// Flips every bracketed run around `coord` to `color`.
///
/// Called after the piece has been placed on `coord`. Each direction is
/// checked against the current grid; runs in different directions never
/// share a cell, so the order of directions does not matter.
///
/// # Returns
///
/// The total number of pieces flipped.
pub fn flip(grid: &mut Grid, coord: Coord, color: Color) -> u32 {
    let mut flipped = 0;
    for dir in Direction::ALL {
        let run = bracket_len(grid, coord, color, dir);
        if run == 0 {
            continue;
        }
        trace!(%coord, ?dir, run, "flipping run");

        let mut cursor = coord;
        for _ in 0..run {
            // `bracket_len` has just walked these cells, so each step is on the grid.
            let Some(next) = cursor.step(dir) else { break };
            if let Ok(cell) = grid.at_mut(next) {
                *cell = Cell::from(color);
            }
            cursor = next;
        }
        flipped += run as u32;
    }
    flipped
}

/// Collects every legal location for `color` in row-major order.
pub fn legal_moves(grid: &Grid, color: Color) -> Vec<Coord> {
    grid.coords()
        .filter(|&c| is_legal_choice(grid, c, color))
        .collect()
}

/// Returns `true` if `color` has at least one legal location.
pub fn has_legal_choices(grid: &Grid, color: Color) -> bool {
    grid.coords().any(|c| is_legal_choice(grid, c, color))
}
