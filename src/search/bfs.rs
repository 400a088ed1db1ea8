use std::collections::VecDeque;

use crate::puzzle::{NoSolution, Puzzle, SearchError, SearchReport, SearchStats};
use crate::rules::movegen::legal_moves;
use crate::search::visited::VisitedSet;
use crate::search::SearchNode;

/// Breadth-first search: returns a minimum-length move sequence.
///
/// Nodes are expanded in non-decreasing path-length order, so the first node
/// that matches the target is at minimum depth. A node's key is marked
/// visited when it is enqueued, not when it is expanded, so a board reachable
/// from several parents is enqueued once.
pub fn solve_bfs(puzzle: &Puzzle) -> Result<SearchReport, SearchError> {
    puzzle.validate()?;

    let mut stats = SearchStats::default();
    if !puzzle.is_feasible() {
        return Ok(SearchReport::not_found(NoSolution::Infeasible, stats));
    }

    let mut visited = VisitedSet::new();
    visited.insert(puzzle.start.key());

    let mut queue: VecDeque<SearchNode> = VecDeque::new();
    queue.push_back(SearchNode::root(puzzle.start));

    while let Some(node) = queue.pop_front() {
        if node.board == puzzle.target {
            return Ok(SearchReport::solved(node.path, stats));
        }

        stats.expanded += 1;
        for mv in legal_moves(&node.board) {
            let successor = node.board.apply(&mv)?;
            stats.generated += 1;
            if visited.insert(successor.key()) {
                queue.push_back(node.child(successor, mv));
            }
        }
    }

    // The entire component reachable from the start holds no matching board.
    Ok(SearchReport::not_found(NoSolution::Exhausted, stats))
}
