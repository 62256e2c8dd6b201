//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        write!(f, "{name}")
    }
}

/// Piece colors.
///
/// Row 0 is the far rank, so Light pieces start on rows 6 and 7 and advance
/// toward decreasing row numbers; Dark pieces mirror that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Both colors in index order (Light=0, Dark=1)
    pub const BOTH: [Color; 2] = [Color::Light, Color::Dark];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a pawn push (-1 for Light, +1 for Dark)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Starting row of this color's pawns (6 for Light, 1 for Dark)
    #[inline]
    #[must_use]
    pub const fn pawn_home_row(self) -> usize {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}
