use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::puzzle::{NoSolution, Puzzle, SearchError, SearchReport, SearchStats};
use crate::rules::movegen::legal_moves;
use crate::search::heuristic::{AllTargetsManhattan, HeuristicLike};
use crate::search::visited::VisitedSet;
use crate::search::SearchNode;

/// Best-first search with the default [`AllTargetsManhattan`] estimator.
pub fn solve_astar(puzzle: &Puzzle) -> Result<SearchReport, SearchError> {
    solve_astar_with(puzzle, &AllTargetsManhattan)
}

/// Best-first search ordered by `f = g + h`, where `g` is the path length so
/// far and `h` comes from the supplied estimator.
///
/// The open set is a plain priority queue without decrease-key: a board may
/// be enqueued several times at different costs, and the closed-set check at
/// expansion time is what prevents re-expansion and guarantees termination;
/// memory is traded for simplicity. Entries with equal `f` pop in insertion
/// order via a sequence number, so re-solves are identical.
pub fn solve_astar_with<H: HeuristicLike>(
    puzzle: &Puzzle,
    heuristic: &H,
) -> Result<SearchReport, SearchError> {
    puzzle.validate()?;

    let mut stats = SearchStats::default();
    if !puzzle.is_feasible() {
        return Ok(SearchReport::not_found(NoSolution::Infeasible, stats));
    }

    let mut closed = VisitedSet::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    open.push(OpenEntry {
        f: heuristic.estimate(&puzzle.start, &puzzle.target) as u64,
        seq,
        node: SearchNode::root(puzzle.start),
    });

    while let Some(entry) = open.pop() {
        let node = entry.node;
        if node.board == puzzle.target {
            return Ok(SearchReport::solved(node.path, stats));
        }
        if !closed.insert(node.board.key()) {
            // An earlier (no costlier) duplicate was already expanded.
            continue;
        }

        stats.expanded += 1;
        for mv in legal_moves(&node.board) {
            let successor = node.board.apply(&mv)?;
            stats.generated += 1;
            if closed.contains(successor.key()) {
                continue;
            }

            let g = node.depth() as u64 + 1;
            let f = g + heuristic.estimate(&successor, &puzzle.target) as u64;
            seq += 1;
            open.push(OpenEntry {
                f,
                seq,
                node: node.child(successor, mv),
            });
        }
    }

    Ok(SearchReport::not_found(NoSolution::Exhausted, stats))
}

/// Open-set entry. `BinaryHeap` is a max-heap, so the ordering is inverted:
/// the smallest `f` pops first, and among equal `f` the earliest insertion
/// wins.
#[derive(Debug)]
struct OpenEntry {
    f: u64,
    seq: u64,
    node: SearchNode,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.seq).cmp(&(self.f, self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
