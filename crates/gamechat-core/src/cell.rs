//! Board cell representation.

use std::fmt;

/// A cell on the 8x8 board, indexed 0-63.
///
/// Cells are indexed row-major from the top-left corner:
/// - row 0 = cells 0..=7
/// - row 7 = cells 56..=63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 64;

    /// Creates a cell from row and column (each 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Cell(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a cell from a raw index. Anything outside 0-63 is rejected.
    #[inline]
    pub const fn from_index(index: i32) -> Option<Self> {
        if index >= 0 && index < 64 {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// Iterates over all 64 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..64).map(Cell)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the cell `d_row` rows and `d_col` columns away.
    ///
    /// Returns `None` when the target falls off the board, including moves
    /// that would wrap from column 7 into column 0 of the next row (or back).
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Cell((row * 8 + col) as u8))
    }

    /// Returns true for the dark squares that checkers is played on.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the textual tag used by the sparse board format.
    pub fn tag(self) -> String {
        self.0.to_string()
    }

    /// Parses a textual tag back into a cell.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse::<i32>().ok().and_then(Cell::from_index)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
