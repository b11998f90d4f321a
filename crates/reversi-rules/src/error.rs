//! Error types for the rules engine.

use crate::coord::Coord;

/// Errors reported by grid access and move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Direct cell access outside the grid.
    #[error("location ({row}, {col}) is outside a {dimension}x{dimension} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },

    /// The target cell is occupied or brackets nothing.
    #[error("illegal move: {0}")]
    IllegalMove(Coord),

    /// An empty cell was used where a player color is required.
    #[error("empty cell has no color")]
    InvalidColor,

    /// Grids must have an even dimension of at least 2.
    #[error("unsupported grid dimension {0}: must be even and at least 2")]
    InvalidDimension(usize),

    #[error("invalid grid string: {0}")]
    InvalidGridString(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RulesError>;
