//! Final scoring.

use std::cmp::Ordering;
use std::fmt;

use crate::grid::Grid;

/// Who won, decided purely by piece count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    BlackWins,
    WhiteWins,
    Tie,
}

/// Piece counts at the end of a game together with the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub black: u32,
    pub white: u32,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn from_counts(black: u32, white: u32) -> Outcome {
        let verdict = match white.cmp(&black) {
            Ordering::Greater => Verdict::WhiteWins,
            Ordering::Less => Verdict::BlackWins,
            Ordering::Equal => Verdict::Tie,
        };
        Outcome {
            black,
            white,
            verdict,
        }
    }

    pub fn from_grid(grid: &Grid) -> Outcome {
        let (black, white) = grid.count_pieces();
        Outcome::from_counts(black, white)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::BlackWins => write!(f, "B wins"),
            Verdict::WhiteWins => write!(f, "W wins"),
            Verdict::Tie => write!(f, "Tie"),
        }
    }
}
