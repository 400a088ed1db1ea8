use crate::puzzle::{NoSolution, Puzzle, SearchError, SearchReport, SearchStats};
use crate::rules::movegen::legal_moves;
use crate::search::visited::VisitedSet;
use crate::search::SearchNode;

/// Depth-bounded depth-first search.
///
/// Successors are pushed in reverse generator order so that popping restores
/// the generator's left-to-right preference. The depth bound gates expansion,
/// not the goal test: a node at the bound is still checked against the
/// target. The visited set is global to the run (a board equal to one
/// already expanded is never expanded again), so this finds *some* solution
/// within the bound, not necessarily the shortest.
pub fn solve_dfs(puzzle: &Puzzle, max_depth: usize) -> Result<SearchReport, SearchError> {
    puzzle.validate()?;
    if max_depth == 0 {
        return Err(SearchError::InvalidParameter {
            param: "max_depth",
            reason: "must be positive".to_string(),
        });
    }

    let mut stats = SearchStats::default();
    if !puzzle.is_feasible() {
        return Ok(SearchReport::not_found(NoSolution::Infeasible, stats));
    }

    let mut visited = VisitedSet::new();
    let mut stack: Vec<SearchNode> = vec![SearchNode::root(puzzle.start)];

    while let Some(node) = stack.pop() {
        if node.board == puzzle.target {
            return Ok(SearchReport::solved(node.path, stats));
        }
        if node.depth() >= max_depth {
            continue;
        }
        if !visited.insert(node.board.key()) {
            continue;
        }

        stats.expanded += 1;
        let moves = legal_moves(&node.board);
        stats.generated += moves.len() as u64;
        for mv in moves.iter().rev() {
            let successor = node.board.apply(mv)?;
            stack.push(node.child(successor, *mv));
        }
    }

    Ok(SearchReport::not_found(NoSolution::Exhausted, stats))
}
