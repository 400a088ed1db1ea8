//! Golden results for the 2x3 five-piece puzzle: walk the king across a
//! board where every other piece must end up back where it started.

use piece_shuffle::puzzle::{NoSolution, Outcome};
use piece_shuffle::scenarios;
use piece_shuffle::search::astar::solve_astar;
use piece_shuffle::search::backtrack::solve_backtracking;
use piece_shuffle::search::bfs::solve_bfs;
use piece_shuffle::search::dfs::solve_dfs;

#[test]
fn bfs_finds_the_eight_move_minimum() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_bfs(&puzzle).unwrap();

    let solution = report.outcome.solution().expect("solvable");
    assert_eq!(solution.len(), 8);
    assert_eq!(solution.replay(&puzzle.start).unwrap(), puzzle.target);
    assert!(report.stats.expanded > 0);
}

#[test]
fn astar_matches_the_minimum_here() {
    // The default estimator is not admissible in general, but on this
    // instance best-first still lands on an 8-move line.
    let puzzle = scenarios::king_to_corner();
    let report = solve_astar(&puzzle).unwrap();

    let solution = report.outcome.solution().expect("solvable");
    assert_eq!(solution.len(), 8);
    assert_eq!(solution.replay(&puzzle.start).unwrap(), puzzle.target);
}

#[test]
fn dfs_takes_the_long_way_round_within_its_bound() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_dfs(&puzzle, 20).unwrap();

    let solution = report.outcome.solution().expect("solvable within 20");
    assert_eq!(solution.len(), 17);
    assert_eq!(solution.replay(&puzzle.start).unwrap(), puzzle.target);
}

#[test]
fn dfs_under_the_minimum_bound_finds_nothing() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_dfs(&puzzle, 7).unwrap();
    assert_eq!(report.outcome, Outcome::NotFound(NoSolution::Exhausted));
}

#[test]
fn backtracking_at_the_exact_bound_finds_the_minimum() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_backtracking(&puzzle, 8).unwrap();

    let solution = report.outcome.solution().expect("solvable within 8");
    assert_eq!(solution.len(), 8);
    assert_eq!(solution.replay(&puzzle.start).unwrap(), puzzle.target);
}

#[test]
fn backtracking_under_the_minimum_bound_finds_nothing() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_backtracking(&puzzle, 7).unwrap();
    assert_eq!(report.outcome, Outcome::NotFound(NoSolution::Exhausted));
}
