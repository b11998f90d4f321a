//! Cell contents and player colors.

use std::fmt;

use crate::error::RulesError;

/// The color of a player.
///
/// Turns and acting colors are always one of these two values, so an empty
/// cell can never be "the side to move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the other player's color.
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-letter name used by the console (`B` or `W`).
    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Represents the contents of a single grid cell.
///
/// The `Cell` enum has three variants:
///
/// * `Empty` - Nothing has been placed here yet.
/// * `Black` - Occupied by a black piece.
/// * `White` - Occupied by a white piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Converts the cell to the character used by [`crate::grid::Grid::from_string`].
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'X'` for `Cell::Black`
    /// * `'O'` for `Cell::White`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    /// Parses a cell from its character form. Returns `None` for anything
    /// other than `-`, `X` or `O`.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::Black),
            'O' => Some(Cell::White),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the color occupying this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    /// Returns the cell with the opposite piece on it.
    ///
    /// # Errors
    ///
    /// `RulesError::InvalidColor` when called on `Cell::Empty`, which has no
    /// opposite.
    pub fn opposite(self) -> Result<Cell, RulesError> {
        Color::try_from(self).map(|color| Cell::from(color.opposite()))
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Color {
    type Error = RulesError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.color().ok_or(RulesError::InvalidColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn test_cell_opposite() {
        assert_eq!(Cell::Black.opposite(), Ok(Cell::White));
        assert_eq!(Cell::White.opposite(), Ok(Cell::Black));
        assert_eq!(Cell::Empty.opposite(), Err(RulesError::InvalidColor));
    }

    #[test]
    fn test_char_roundtrip() {
        for cell in [Cell::Empty, Cell::Black, Cell::White] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(Cell::from(Color::Black), Cell::Black);
        assert_eq!(Cell::from(Color::White), Cell::White);
        assert_eq!(Color::try_from(Cell::White), Ok(Color::White));
        assert!(Color::try_from(Cell::Empty).is_err());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().color(), None);
    }
}
