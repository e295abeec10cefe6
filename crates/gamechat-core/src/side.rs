//! Player side representation.

use serde::{Deserialize, Serialize};

/// The two players of a game.
///
/// Primary starts at the bottom of the board (high rows) and advances toward
/// row 0. Secondary starts at the top and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Primary = 0,
    Secondary = 1,
}

impl Side {
    /// Both sides in order.
    pub const BOTH: [Side; 2] = [Side::Primary, Side::Secondary];

    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }

    /// Returns the index (0 for Primary, 1 for Secondary).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward step (-1 for Primary, +1 for Secondary).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Primary => -1,
            Side::Secondary => 1,
        }
    }

    /// Returns the row this side's back rank sits on.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::Primary => 7,
            Side::Secondary => 0,
        }
    }

    /// Returns the farthest row this side can advance to.
    #[inline]
    pub const fn far_row(self) -> u8 {
        self.opposite().home_row()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Primary => write!(f, "Primary"),
            Side::Secondary => write!(f, "Secondary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Primary.opposite(), Side::Secondary);
        assert_eq!(Side::Secondary.opposite(), Side::Primary);
    }

    #[test]
    fn forward_points_away_from_home() {
        assert_eq!(Side::Primary.forward(), -1);
        assert_eq!(Side::Secondary.forward(), 1);
        assert_eq!(Side::Primary.far_row(), 0);
        assert_eq!(Side::Secondary.far_row(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::Primary), "Primary");
        assert_eq!(format!("{}", Side::Secondary), "Secondary");
    }
}
