use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A grid coordinate: `row` counts downward from the top edge, `col`
/// rightward from the left edge. Signed so that ray walking and deltas can
/// step outside the board and be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.row.abs().max(self.col.abs())
    }

    #[inline]
    pub fn manhattan_norm(self) -> i32 {
        self.row.abs() + self.col.abs()
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 8 king steps around the origin.
///
/// The order is fixed: depth-first and backtracking tie-breaks depend on it.
pub const KING_STEPS: [Coord; 8] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 0 },
    Coord { row: -1, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 0, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 0 },
    Coord { row: 1, col: 1 },
];
