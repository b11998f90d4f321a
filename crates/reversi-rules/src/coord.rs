//! Grid locations and the eight compass directions between them.

use std::fmt;
use std::str::FromStr;

/// Number of letters available for row names (`a` to `z`).
pub const MAX_ROWS: usize = 26;

/// A location on the grid, stored as 0-based row and column indices.
///
/// Externally a location is written as a row letter followed by a 1-based
/// column number. On a 4x4 grid the cells are addressed as follows:
///
/// ```text
///    1  2  3  4
/// a a1 a2 a3 a4
/// b b1 b2 b3 b4
/// c c1 c2 c3 c4
/// d d1 d2 d3 d4
/// ```
///
/// A `Coord` carries no grid dimension; whether it lies on a particular grid
/// is decided by [`crate::grid::Grid::is_valid_location`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Returns the neighbouring coordinate one step towards `dir`, or `None`
    /// if that step would leave the non-negative quadrant.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        Some(Coord {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Returns the row letter (`'a'` for row 0), or `None` past `'z'`.
    pub fn row_letter(self) -> Option<char> {
        (self.row < MAX_ROWS).then(|| (b'a' + self.row as u8) as char)
    }
}

/// One of the eight compass directions a capture line can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit (row, column) delta. Rows grow southwards, columns eastwards.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Error type for parsing a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// Input was empty or had no column part.
    #[error("invalid location format: expected a row letter and a column number (e.g. 'd3')")]
    InvalidFormat,
    /// Row must be a letter a-z or A-Z.
    #[error("invalid row '{0}': must be a letter a-z")]
    InvalidRow(char),
    /// Column must be a positive integer.
    #[error("invalid column '{0}': must be a number starting at 1")]
    InvalidColumn(String),
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parses `"d3"`, `"D3"` or `"d 3"` into the 0-based `Coord { row: 3, col: 2 }`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row_char = chars.next().ok_or(CoordError::InvalidFormat)?;
        if !row_char.is_ascii_alphabetic() {
            return Err(CoordError::InvalidRow(row_char));
        }

        let col_str = chars.as_str().trim();
        if col_str.is_empty() {
            return Err(CoordError::InvalidFormat);
        }
        let col = col_str
            .parse::<usize>()
            .ok()
            .filter(|&c| c >= 1)
            .ok_or_else(|| CoordError::InvalidColumn(col_str.to_string()))?;

        let row = (row_char.to_ascii_lowercase() as u8 - b'a') as usize;
        Ok(Coord::new(row, col - 1))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "[{}]{}", self.row, self.col + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("a1".parse::<Coord>().unwrap(), Coord::new(0, 0));
        assert_eq!("d3".parse::<Coord>().unwrap(), Coord::new(3, 2));
        assert_eq!("D3".parse::<Coord>().unwrap(), Coord::new(3, 2));
        assert_eq!("b 2".parse::<Coord>().unwrap(), Coord::new(1, 1));
        assert_eq!(" c12\n".parse::<Coord>().unwrap(), Coord::new(2, 11));
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!("".parse::<Coord>(), Err(CoordError::InvalidFormat));
        assert_eq!("a".parse::<Coord>(), Err(CoordError::InvalidFormat));
        assert_eq!("1a".parse::<Coord>(), Err(CoordError::InvalidRow('1')));
        assert_eq!(
            "a0".parse::<Coord>(),
            Err(CoordError::InvalidColumn("0".to_string()))
        );
        assert_eq!(
            "ax".parse::<Coord>(),
            Err(CoordError::InvalidColumn("x".to_string()))
        );
        assert_eq!(
            "a-1".parse::<Coord>(),
            Err(CoordError::InvalidColumn("-1".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(0, 0).to_string(), "a1");
        assert_eq!(Coord::new(7, 7).to_string(), "h8");
        assert_eq!(Coord::new(2, 9).to_string(), "c10");
        assert_eq!(Coord::new(30, 0).to_string(), "[30]1");

        for row in 0..MAX_ROWS {
            for col in 0..12 {
                let coord = Coord::new(row, col);
                assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
            }
        }
    }

    #[test]
    fn test_step() {
        let c = Coord::new(1, 1);
        assert_eq!(c.step(Direction::North), Some(Coord::new(0, 1)));
        assert_eq!(c.step(Direction::SouthEast), Some(Coord::new(2, 2)));
        assert_eq!(c.step(Direction::West), Some(Coord::new(1, 0)));

        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::NorthWest), None);
        assert_eq!(origin.step(Direction::East), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_directions_are_unit_and_distinct() {
        let deltas: Vec<(isize, isize)> = Direction::ALL.iter().map(|d| d.delta()).collect();
        for (i, &(dr, dc)) in deltas.iter().enumerate() {
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert_ne!((dr, dc), (0, 0));
            assert!(!deltas[i + 1..].contains(&(dr, dc)));
        }
    }
}
