use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use piece_shuffle::board::{Board, Cell, PieceKind};
use piece_shuffle::scenarios;
use piece_shuffle::search::astar::solve_astar_with;
use piece_shuffle::search::heuristic::{
    AllTargetsManhattan, HeuristicLike, NearestTargetManhattan,
};

#[test]
fn all_targets_estimator_counts_every_matching_cell() {
    let puzzle = scenarios::king_to_corner();
    // King 3 to its lone target cell; each bishop and rook pays 0 for its
    // own cell plus 1 for its twin's.
    assert_eq!(AllTargetsManhattan.estimate(&puzzle.start, &puzzle.target), 7);
}

#[test]
fn all_targets_estimator_is_nonzero_on_matched_boards_with_twin_pieces() {
    // The documented non-admissibility: every piece also pays for its twin's
    // cell, so even a solved position scores 4 here.
    let puzzle = scenarios::king_to_corner();
    assert_eq!(AllTargetsManhattan.estimate(&puzzle.target, &puzzle.target), 4);
}

#[test]
fn nearest_target_estimator_charges_only_the_closest_cell() {
    let puzzle = scenarios::king_to_corner();
    assert_eq!(
        NearestTargetManhattan.estimate(&puzzle.start, &puzzle.target),
        3
    );
}

#[test]
fn nearest_target_estimator_is_zero_on_matched_boards() {
    let puzzle = scenarios::king_to_corner();
    assert_eq!(
        NearestTargetManhattan.estimate(&puzzle.target, &puzzle.target),
        0
    );

    let mut prng = XorShiftRng::seed_from_u64(0xbead);
    for _ in 0..500 {
        let cells: Vec<Cell> = (0..9)
            .map(|_| match prng.gen_range(0..6u32) {
                0 => Some(PieceKind::King),
                1 => Some(PieceKind::Bishop),
                2 => Some(PieceKind::Rook),
                _ => None,
            })
            .collect();
        let board = Board::new(3, 3, &cells).unwrap();
        assert_eq!(NearestTargetManhattan.estimate(&board, &board), 0);
    }
}

#[test]
fn the_search_loop_accepts_a_substituted_estimator() {
    let puzzle = scenarios::king_to_corner();
    let report = solve_astar_with(&puzzle, &NearestTargetManhattan).unwrap();

    let solution = report.outcome.solution().expect("solvable");
    assert_eq!(solution.len(), 8);
    assert_eq!(solution.replay(&puzzle.start).unwrap(), puzzle.target);
}
