//! Puzzle configuration and the solver result model.
//!
//! A [`Puzzle`] bundles a start and a target board; every strategy consumes
//! one and returns a [`SearchReport`]. Negative results are values
//! ([`NoSolution`]), never errors: strategies only error on contract faults
//! (fabricated moves) and parameter faults (zero bounds or budgets).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, InvalidMove, Move};

/// A start/target pair to be solved.
///
/// The engine never mutates either board; strategies copy the start and work
/// on successor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Board,
    pub target: Board,
}

impl Puzzle {
    pub fn new(start: Board, target: Board) -> Result<Puzzle, SearchError> {
        let puzzle = Puzzle { start, target };
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Validate puzzle invariants. Called by every strategy before searching.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start.rows() != self.target.rows() || self.start.cols() != self.target.cols() {
            return Err(SearchError::InvalidPuzzle {
                reason: format!(
                    "start is {}x{} but target is {}x{}",
                    self.start.rows(),
                    self.start.cols(),
                    self.target.rows(),
                    self.target.cols()
                ),
            });
        }
        Ok(())
    }

    /// Fast feasibility pre-check: moves only relocate pieces, so the puzzle
    /// is unsolvable unless start and target hold the same piece multiset.
    pub fn is_feasible(&self) -> bool {
        self.start.piece_counts() == self.target.piece_counts()
    }
}

/// Structured errors returned by search routines.
///
/// These are faults, not negative search results; an unsolvable puzzle is
/// reported through [`NoSolution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The puzzle is internally inconsistent (e.g. mismatched dimensions).
    InvalidPuzzle { reason: String },
    /// A strategy parameter would degenerate the search to zero work.
    InvalidParameter {
        param: &'static str,
        reason: String,
    },
    /// A move violated the application contract mid-search; the move
    /// generator and the strategies disagree, which is a programming fault.
    IllegalMove(InvalidMove),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPuzzle { reason } => write!(f, "invalid puzzle: {reason}"),
            SearchError::InvalidParameter { param, reason } => {
                write!(f, "invalid parameter {param}: {reason}")
            }
            SearchError::IllegalMove(inner) => write!(f, "illegal move during search: {inner}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<InvalidMove> for SearchError {
    fn from(inner: InvalidMove) -> Self {
        SearchError::IllegalMove(inner)
    }
}

/// An ordered move sequence transforming the start board into the target.
///
/// Empty only when the start already equals the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Re-apply the move sequence against `start`, returning the final board.
    ///
    /// This is the consumer-side contract: a play layer replays the solution
    /// one move at a time against its own board through the same `apply`.
    pub fn replay(&self, start: &Board) -> Result<Board, InvalidMove> {
        let mut board = *start;
        for mv in &self.moves {
            board = board.apply(mv)?;
        }
        Ok(board)
    }
}

/// Why a strategy found nothing: a well-formed negative result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSolution {
    /// Start and target hold different piece multisets; no move sequence can
    /// ever connect them. Detected before any search begins.
    Infeasible,
    /// The strategy exhausted its search space (or depth bound) without
    /// matching the target.
    Exhausted,
    /// A randomized strategy spent its attempt budget. A solution may still
    /// exist; these strategies are best-effort.
    BudgetExhausted,
}

/// The outcome of one solve call: a solution, or an explicit not-found.
///
/// A zero-move solution (start already equals target) is `Solved`, never
/// conflated with `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Solved(Solution),
    NotFound(NoSolution),
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::NotFound(_) => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Running counters tracked during a search.
///
/// Counters only: the engine itself never preempts. A caller wanting bounded
/// latency uses the depth/attempt parameters or runs the call off-thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: u64,
    /// Successor boards produced by the move generator.
    pub generated: u64,
}

/// What a strategy returns: the outcome plus its effort counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn solved(moves: Vec<Move>, stats: SearchStats) -> SearchReport {
        SearchReport {
            outcome: Outcome::Solved(Solution { moves }),
            stats,
        }
    }

    pub fn not_found(reason: NoSolution, stats: SearchStats) -> SearchReport {
        SearchReport {
            outcome: Outcome::NotFound(reason),
            stats,
        }
    }
}
