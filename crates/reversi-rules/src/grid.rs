//! Square grid of cells with bounds-checked access.

use std::fmt;

use crate::cell::{Cell, Color};
use crate::coord::Coord;
use crate::error::{Result, RulesError};

/// Smallest grid that can hold the starting pattern.
pub const MIN_DIMENSION: usize = 2;
/// Conventional board size.
pub const DEFAULT_DIMENSION: usize = 8;

/// An N x N matrix of cells.
///
/// Cells live in a single row-major buffer indexed by `row * N + col`.
/// Cloning a `Grid` copies the buffer, so a clone never shares state with
/// the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with the standard starting pattern at the center.
    ///
    /// With `m = N/2 - 1`, Black occupies (m, m) and (m+1, m+1) and White
    /// occupies (m, m+1) and (m+1, m).
    ///
    /// # Errors
    ///
    /// `RulesError::InvalidDimension` unless `dimension` is even and at least
    /// `MIN_DIMENSION`.
    pub fn new(dimension: usize) -> Result<Grid> {
        let mut grid = Grid::empty(dimension)?;
        let m = dimension / 2 - 1;
        grid.cells[m * dimension + m] = Cell::Black;
        grid.cells[m * dimension + m + 1] = Cell::White;
        grid.cells[(m + 1) * dimension + m] = Cell::White;
        grid.cells[(m + 1) * dimension + m + 1] = Cell::Black;
        Ok(grid)
    }

    /// Creates a grid with every cell empty.
    pub fn empty(dimension: usize) -> Result<Grid> {
        let len = dimension
            .checked_mul(dimension)
            .filter(|_| is_supported_dimension(dimension))
            .ok_or(RulesError::InvalidDimension(dimension))?;
        Ok(Grid {
            dimension,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Creates a grid from `N*N` cell characters in row-major order.
    ///
    /// `X` is Black, `O` is White and `-` is empty. Whitespace is ignored so
    /// the text may be laid out one row per line.
    pub fn from_string(text: &str, dimension: usize) -> Result<Grid> {
        let mut grid = Grid::empty(dimension)?;
        let mut count = 0;
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(c)
                .ok_or_else(|| RulesError::InvalidGridString(format!("unexpected character '{c}'")))?;
            if count >= grid.cells.len() {
                return Err(RulesError::InvalidGridString(format!(
                    "more than {} cells",
                    grid.cells.len()
                )));
            }
            grid.cells[count] = cell;
            count += 1;
        }
        if count != grid.cells.len() {
            return Err(RulesError::InvalidGridString(format!(
                "expected {} cells, found {count}",
                grid.cells.len()
            )));
        }
        Ok(grid)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns `true` if `coord` lies on this grid.
    #[inline]
    pub fn is_valid_location(&self, coord: Coord) -> bool {
        coord.row < self.dimension && coord.col < self.dimension
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize> {
        if self.is_valid_location(coord) {
            Ok(coord.row * self.dimension + coord.col)
        } else {
            Err(RulesError::OutOfRange {
                row: coord.row,
                col: coord.col,
                dimension: self.dimension,
            })
        }
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// `RulesError::OutOfRange` if `coord` is off the grid.
    #[inline]
    pub fn at(&self, coord: Coord) -> Result<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Returns a mutable reference to the cell at `coord`.
    ///
    /// # Errors
    ///
    /// `RulesError::OutOfRange` if `coord` is off the grid.
    #[inline]
    pub fn at_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let i = self.index(coord)?;
        Ok(&mut self.cells[i])
    }

    /// Overwrites the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        *self.at_mut(coord)? = cell;
        Ok(())
    }

    /// Returns `true` if `coord` is on the grid and holds a piece of the
    /// other color. Off-grid locations are simply `false`.
    #[inline]
    pub fn is_opposite_color(&self, coord: Coord, color: Color) -> bool {
        self.at(coord)
            .is_ok_and(|cell| cell.color().is_some_and(|c| c != color))
    }

    /// Returns `true` if `coord` is on the grid and holds exactly `color`.
    #[inline]
    pub fn is_same_color(&self, coord: Coord, color: Color) -> bool {
        self.at(coord).is_ok_and(|cell| cell == Cell::from(color))
    }

    /// Counts the pieces on the grid.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)`.
    pub fn count_pieces(&self) -> (u32, u32) {
        self.cells
            .iter()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Returns the number of pieces of `color`.
    pub fn count(&self, color: Color) -> u32 {
        let (black, white) = self.count_pieces();
        match color {
            Color::Black => black,
            Color::White => white,
        }
    }

    /// Returns the number of empty cells.
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_empty()).count() as u32
    }

    /// Iterates over every location in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let n = self.dimension;
        (0..n * n).map(move |i| Coord::new(i / n, i % n))
    }

    /// Iterates over the rows of the grid as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }
}

/// Returns `true` if the starting pattern fits a grid of this dimension.
///
/// There is no upper bound here: coordinates are plain indices. Front ends
/// that name rows by letter cap the size themselves.
pub fn is_supported_dimension(dimension: usize) -> bool {
    dimension >= MIN_DIMENSION && dimension.is_multiple_of(2)
}

impl fmt::Display for Grid {
    /// Writes one line per row using the `X`/`O`/`-` cell characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
