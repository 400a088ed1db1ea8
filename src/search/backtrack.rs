use crate::board::{Board, Move};
use crate::puzzle::{NoSolution, Puzzle, SearchError, SearchReport, SearchStats};
use crate::rules::movegen::legal_moves;
use crate::search::visited::VisitedSet;

/// Depth-bounded backtracking in path form.
///
/// The current board is goal-tested before the depth gate, then marked
/// on-path; candidate moves whose successor is already on the path are
/// skipped, and the marker is released when the call unwinds. Path-scoped
/// marking keeps the strategy complete within its bound: a board is only
/// barred while it sits on the active path, so an alternate route through it
/// later in the search is still explored. Returns the first success found
/// under the move generator's natural ordering.
pub fn solve_backtracking(puzzle: &Puzzle, max_depth: usize) -> Result<SearchReport, SearchError> {
    puzzle.validate()?;
    if max_depth == 0 {
        return Err(SearchError::InvalidParameter {
            param: "max_depth",
            reason: "must be positive".to_string(),
        });
    }

    if !puzzle.is_feasible() {
        return Ok(SearchReport::not_found(
            NoSolution::Infeasible,
            SearchStats::default(),
        ));
    }

    let mut backtracker = Backtracker {
        target: puzzle.target,
        max_depth,
        path: Vec::new(),
        on_path: VisitedSet::new(),
        stats: SearchStats::default(),
    };
    let found = backtracker.dive(puzzle.start)?;

    let Backtracker { path, stats, .. } = backtracker;
    if found {
        Ok(SearchReport::solved(path, stats))
    } else {
        Ok(SearchReport::not_found(NoSolution::Exhausted, stats))
    }
}

struct Backtracker {
    target: Board,
    max_depth: usize,
    path: Vec<Move>,
    on_path: VisitedSet,
    stats: SearchStats,
}

impl Backtracker {
    fn dive(&mut self, board: Board) -> Result<bool, SearchError> {
        if board == self.target {
            return Ok(true);
        }
        if self.path.len() >= self.max_depth {
            return Ok(false);
        }

        self.on_path.insert(board.key());
        self.stats.expanded += 1;

        for mv in legal_moves(&board) {
            self.stats.generated += 1;
            let successor = board.apply(&mv)?;
            if self.on_path.contains(successor.key()) {
                continue;
            }

            self.path.push(mv);
            if self.dive(successor)? {
                return Ok(true);
            }
            self.path.pop();
        }

        self.on_path.remove(board.key());
        Ok(false)
    }
}
