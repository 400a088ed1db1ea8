use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// The closed set of piece kinds.
///
/// Adding a kind means adding a variant here plus its movement rule in the
/// move generator; the search strategies are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Bishop,
    Rook,
}

/// Number of piece kinds, for per-kind count tables.
pub const KIND_COUNT: usize = 3;

impl PieceKind {
    pub const ALL: [PieceKind; KIND_COUNT] = [PieceKind::King, PieceKind::Bishop, PieceKind::Rook];

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            King => &[],
        }
    }

    /// Non-zero cell code used by the canonical state key (0 is an empty cell).
    #[inline]
    pub fn code(self) -> u64 {
        self as u64 + 1
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch {
            'K' => Some(PieceKind::King),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            _ => None,
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];
