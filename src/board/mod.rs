//! The immutable board value type, moves and canonical state keys.

pub mod piece;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

pub use piece::PieceKind;

/// Maximum number of cells a board may have.
///
/// This is intentionally small: the search space explodes combinatorially,
/// and a 16-cell cap lets the whole grid pack into a single `u64` state key.
pub const MAX_CELLS: usize = 16;

/// One grid cell: a piece kind, or empty.
pub type Cell = Option<PieceKind>;

/// A fixed-size grid of piece tags representing one configuration.
///
/// A `Board` is a value: applying a move produces a new board and never
/// mutates one referenced by another search node. Cells are stored row-major
/// in a fixed array so boards stay `Copy`, cheap to compare and cheap to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: [Cell; MAX_CELLS],
}

/// Relocation of one piece from `from` to a currently empty `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub kind: PieceKind,
}

/// Canonical encoding of a board used to detect previously seen
/// configurations.
///
/// Cell codes are packed row-major, 2 bits per cell, with the dimensions in
/// the high bits; key equality is equivalent to board equality. The key
/// carries no move-history information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u64);

impl StateKey {
    /// Raw packed representation, intended for compact serialization formats.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A board that cannot be constructed (bad dimensions or malformed text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBoard {
    pub reason: String,
}

impl fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board: {}", self.reason)
    }
}

impl std::error::Error for InvalidBoard {}

/// A move that violates the application contract.
///
/// The move generator never produces such a move; hitting this error means a
/// caller fabricated a move or replayed one against the wrong board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds { from: Coord, to: Coord },
    EmptySource { from: Coord },
    OccupiedTarget { to: Coord },
    KindMismatch { from: Coord, expected: PieceKind, found: PieceKind },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfBounds { from, to } => {
                write!(f, "move {from} -> {to} leaves the board")
            }
            InvalidMove::EmptySource { from } => {
                write!(f, "move source {from} is empty")
            }
            InvalidMove::OccupiedTarget { to } => {
                write!(f, "move target {to} is occupied")
            }
            InvalidMove::KindMismatch { from, expected, found } => {
                write!(
                    f,
                    "move expects {} at {from} but the cell holds {}",
                    expected.letter(),
                    found.letter()
                )
            }
        }
    }
}

impl std::error::Error for InvalidMove {}

impl Board {
    /// Build a board from row-major cells.
    pub fn new(rows: usize, cols: usize, cells: &[Cell]) -> Result<Board, InvalidBoard> {
        if rows == 0 || cols == 0 {
            return Err(InvalidBoard {
                reason: format!("dimensions {rows}x{cols} are degenerate"),
            });
        }
        if rows * cols > MAX_CELLS {
            return Err(InvalidBoard {
                reason: format!("{rows}x{cols} exceeds the {MAX_CELLS}-cell cap"),
            });
        }
        if cells.len() != rows * cols {
            return Err(InvalidBoard {
                reason: format!(
                    "expected {} cells for {rows}x{cols}, got {}",
                    rows * cols,
                    cells.len()
                ),
            });
        }

        let mut packed = [None; MAX_CELLS];
        packed[..cells.len()].copy_from_slice(cells);
        Ok(Board {
            rows: rows as u8,
            cols: cols as u8,
            cells: packed,
        })
    }

    /// Parse a board from text: rows separated by `/` or newlines, one letter
    /// per cell (`K`, `B`, `R`, `.` for empty); spaces are ignored.
    pub fn parse(text: &str) -> Result<Board, InvalidBoard> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.split(['/', '\n']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for ch in line.chars() {
                match ch {
                    ' ' => continue,
                    '.' => row.push(None),
                    _ => match PieceKind::from_letter(ch) {
                        Some(kind) => row.push(Some(kind)),
                        None => {
                            return Err(InvalidBoard {
                                reason: format!("unrecognized cell {ch:?}"),
                            })
                        }
                    },
                }
            }
            rows.push(row);
        }

        let Some(first) = rows.first() else {
            return Err(InvalidBoard {
                reason: "no rows".to_string(),
            });
        };
        let cols = first.len();
        if rows.iter().any(|r| r.len() != cols) {
            return Err(InvalidBoard {
                reason: "rows have unequal lengths".to_string(),
            });
        }

        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
        Board::new(rows.len(), cols, &cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows as i32 && c.col >= 0 && c.col < self.cols as i32
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        debug_assert!(self.in_bounds(c));
        c.row as usize * self.cols() + c.col as usize
    }

    /// Cell contents at `c`. Panics on out-of-bounds coordinates; callers
    /// bounds-check first.
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[self.idx(c)]
    }

    /// Occupied cells in row-major order: the canonical piece iteration
    /// order everything downstream relies on.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, PieceKind)> + '_ {
        (0..self.rows as i32).flat_map(move |row| {
            (0..self.cols as i32).filter_map(move |col| {
                let c = Coord::new(row, col);
                self.get(c).map(|kind| (c, kind))
            })
        })
    }

    /// Apply a move, producing the successor board.
    ///
    /// Pure: `self` is unchanged. Fails if the move breaks the application
    /// contract (empty source, occupied target, wrong kind, out of bounds).
    pub fn apply(&self, mv: &Move) -> Result<Board, InvalidMove> {
        if !self.in_bounds(mv.from) || !self.in_bounds(mv.to) {
            return Err(InvalidMove::OutOfBounds {
                from: mv.from,
                to: mv.to,
            });
        }
        let found = match self.get(mv.from) {
            None => return Err(InvalidMove::EmptySource { from: mv.from }),
            Some(kind) => kind,
        };
        if found != mv.kind {
            return Err(InvalidMove::KindMismatch {
                from: mv.from,
                expected: mv.kind,
                found,
            });
        }
        if self.get(mv.to).is_some() {
            return Err(InvalidMove::OccupiedTarget { to: mv.to });
        }

        let mut next = *self;
        let from_idx = self.idx(mv.from);
        let to_idx = self.idx(mv.to);
        next.cells[from_idx] = None;
        next.cells[to_idx] = Some(mv.kind);
        Ok(next)
    }

    /// Canonical deduplication key for this board.
    pub fn key(&self) -> StateKey {
        let mut raw = ((self.rows as u64) << 40) | ((self.cols as u64) << 36);
        for (i, cell) in self.cells[..self.cell_count()].iter().enumerate() {
            let code = cell.map_or(0, PieceKind::code);
            raw |= code << (2 * i);
        }
        StateKey(raw)
    }

    /// Piece counts per kind, indexed by `PieceKind as usize`.
    ///
    /// Moves only relocate pieces, so this multiset is invariant under every
    /// legal move; a start/target pair with differing counts is unsolvable.
    pub fn piece_counts(&self) -> [u32; piece::KIND_COUNT] {
        let mut counts = [0u32; piece::KIND_COUNT];
        for (_, kind) in self.occupied_cells() {
            counts[kind as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols as i32 {
                match self.get(Coord::new(row, col)) {
                    Some(kind) => write!(f, "{}", kind.letter())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind.letter(), self.from, self.to)
    }
}
