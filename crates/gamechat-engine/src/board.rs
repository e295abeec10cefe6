//! Board storage and selection state.

use crate::CellSet;
use gamechat_core::{Cell, Piece, Side};
use std::fmt;

/// Which rook a castling flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RookSide {
    /// The rook that starts in column 7.
    Kingside,
    /// The rook that starts in column 0.
    Queenside,
}

impl RookSide {
    /// Both rook sides.
    pub const BOTH: [RookSide; 2] = [RookSide::Kingside, RookSide::Queenside];

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            RookSide::Kingside => 7,
            RookSide::Queenside => 0,
        }
    }

    /// Column the king lands on after castling.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            RookSide::Kingside => 6,
            RookSide::Queenside => 2,
        }
    }

    /// Column the rook lands on after castling.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            RookSide::Kingside => 5,
            RookSide::Queenside => 3,
        }
    }
}

/// "Has moved" flags for castling eligibility.
///
/// Six flags in total: for each side, whether the king, the kingside rook,
/// and the queenside rook have left their starting cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE_MOVED: CastlingRights = CastlingRights(0);
    pub const PRIMARY_KING: u8 = 0b00_0001;
    pub const PRIMARY_KINGSIDE_ROOK: u8 = 0b00_0010;
    pub const PRIMARY_QUEENSIDE_ROOK: u8 = 0b00_0100;
    pub const SECONDARY_KING: u8 = 0b00_1000;
    pub const SECONDARY_KINGSIDE_ROOK: u8 = 0b01_0000;
    pub const SECONDARY_QUEENSIDE_ROOK: u8 = 0b10_0000;

    /// Creates rights from raw flags.
    #[inline]
    pub const fn from_bits(flags: u8) -> Self {
        CastlingRights(flags & 0b11_1111)
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    const fn king_flag(side: Side) -> u8 {
        match side {
            Side::Primary => Self::PRIMARY_KING,
            Side::Secondary => Self::SECONDARY_KING,
        }
    }

    const fn rook_flag(side: Side, rook: RookSide) -> u8 {
        match (side, rook) {
            (Side::Primary, RookSide::Kingside) => Self::PRIMARY_KINGSIDE_ROOK,
            (Side::Primary, RookSide::Queenside) => Self::PRIMARY_QUEENSIDE_ROOK,
            (Side::Secondary, RookSide::Kingside) => Self::SECONDARY_KINGSIDE_ROOK,
            (Side::Secondary, RookSide::Queenside) => Self::SECONDARY_QUEENSIDE_ROOK,
        }
    }

    /// Returns true if the side's king has moved.
    #[inline]
    pub const fn king_moved(self, side: Side) -> bool {
        self.0 & Self::king_flag(side) != 0
    }

    /// Returns true if the given rook has moved.
    #[inline]
    pub const fn rook_moved(self, side: Side, rook: RookSide) -> bool {
        self.0 & Self::rook_flag(side, rook) != 0
    }

    /// Returns true if neither the king nor the given rook has moved.
    #[inline]
    pub const fn can_castle(self, side: Side, rook: RookSide) -> bool {
        !self.king_moved(side) && !self.rook_moved(side, rook)
    }

    /// Marks the side's king as moved.
    #[inline]
    pub fn mark_king_moved(&mut self, side: Side) {
        self.0 |= Self::king_flag(side);
    }

    /// Marks the given rook as moved.
    #[inline]
    pub fn mark_rook_moved(&mut self, side: Side, rook: RookSide) {
        self.0 |= Self::rook_flag(side, rook);
    }
}

/// An 8x8 board with the transient selection used while a player picks a move.
///
/// The board owns every piece it stores. Selection and highlights are only
/// bookkeeping for the host and never influence move legality.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Cell::COUNT],
    castling: CastlingRights,
    selected: Option<Cell>,
    highlighted: CellSet,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [None; Cell::COUNT],
            castling: CastlingRights::NONE_MOVED,
            selected: None,
            highlighted: CellSet::EMPTY,
        }
    }

    /// Returns the piece on a cell, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index() as usize]
    }

    /// Returns the piece at a raw index. Out-of-range indices are empty.
    #[inline]
    pub fn get_index(&self, index: i32) -> Option<Piece> {
        Cell::from_index(index).and_then(|cell| self.get(cell))
    }

    /// Puts a piece on a cell, returning whatever was there.
    #[inline]
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Option<Piece> {
        self.cells[cell.index() as usize].replace(piece)
    }

    /// Empties a cell, returning whatever was there.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index() as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning the piece that was on `to`.
    pub fn relocate(&mut self, from: Cell, to: Cell) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// Returns true if the cell is empty.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Returns true if the cell holds a piece belonging to `side`.
    #[inline]
    pub fn is_side(&self, cell: Cell, side: Side) -> bool {
        matches!(self.get(cell), Some(p) if p.side == side)
    }

    /// Iterates over all occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.get(cell).map(|p| (cell, p)))
    }

    /// Iterates over the cells occupied by one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    /// Returns the castling flags.
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the castling flags for update.
    #[inline]
    pub fn castling_mut(&mut self) -> &mut CastlingRights {
        &mut self.castling
    }

    /// Returns the selected cell, if any.
    #[inline]
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Selects a cell and records its legal destinations as highlights.
    pub fn select(&mut self, cell: Cell, destinations: CellSet) {
        self.selected = Some(cell);
        self.highlighted = destinations;
    }

    /// Clears the selection and all highlights.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted = CellSet::EMPTY;
    }

    /// Returns true if the cell is one of the selection's destinations.
    #[inline]
    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.highlighted.contains(cell)
    }

    /// Returns the highlighted destinations.
    #[inline]
    pub fn highlighted(&self) -> CellSet {
        self.highlighted
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(selected: {:?}, castling: {:#08b})", self.selected, self.castling.bits())?;
        write!(f, "{}", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = Cell::new(row, col)
                    .and_then(|cell| self.get(cell))
                    .map_or('.', Piece::code);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
