use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use piece_shuffle::board::{Board, Cell, Move, PieceKind};
use piece_shuffle::core::coord::Coord;
use piece_shuffle::rules::movegen::legal_moves;

fn deterministic_prng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x5eed)
}

fn random_board(prng: &mut XorShiftRng) -> Board {
    let rows = prng.gen_range(1..=4usize);
    let cols = prng.gen_range(1..=4usize);
    let cells: Vec<Cell> = (0..rows * cols)
        .map(|_| match prng.gen_range(0..6u32) {
            0 => Some(PieceKind::King),
            1 => Some(PieceKind::Bishop),
            2 => Some(PieceKind::Rook),
            _ => None,
        })
        .collect();
    Board::new(rows, cols, &cells).unwrap()
}

fn step_toward(from: Coord, to: Coord) -> Coord {
    Coord::new((to.row - from.row).signum(), (to.col - from.col).signum())
}

#[test]
fn generated_moves_target_empty_in_bounds_cells() {
    const FUZZ_TIMES: usize = 500;

    let mut prng = deterministic_prng();

    for _ in 0..FUZZ_TIMES {
        let board = random_board(&mut prng);
        for mv in legal_moves(&board) {
            assert!(board.in_bounds(mv.from));
            assert!(board.in_bounds(mv.to));
            assert_ne!(mv.from, mv.to, "no piece may move zero squares");
            assert_eq!(board.get(mv.from), Some(mv.kind));
            assert_eq!(board.get(mv.to), None, "target must be empty: {mv}");
        }
    }
}

#[test]
fn sliding_moves_never_jump_over_pieces() {
    const FUZZ_TIMES: usize = 500;

    let mut prng = deterministic_prng();

    for _ in 0..FUZZ_TIMES {
        let board = random_board(&mut prng);
        for mv in legal_moves(&board) {
            let delta = mv.to - mv.from;
            match mv.kind {
                PieceKind::King => {
                    assert_eq!(delta.chebyshev_norm(), 1, "king step too long: {mv}");
                }
                PieceKind::Rook => {
                    assert!(delta.row == 0 || delta.col == 0, "rook ray not orthogonal: {mv}");
                    assert_clear_ray(&board, &mv);
                }
                PieceKind::Bishop => {
                    assert_eq!(
                        delta.row.abs(),
                        delta.col.abs(),
                        "bishop ray not diagonal: {mv}"
                    );
                    assert_clear_ray(&board, &mv);
                }
            }
        }
    }
}

fn assert_clear_ray(board: &Board, mv: &Move) {
    let step = step_toward(mv.from, mv.to);
    let mut cur = mv.from + step;
    while cur != mv.to {
        assert_eq!(board.get(cur), None, "{mv} passes through {cur}");
        cur = cur + step;
    }
}

#[test]
fn applying_a_legal_move_conserves_the_piece_multiset() {
    const FUZZ_TIMES: usize = 500;

    let mut prng = deterministic_prng();

    for _ in 0..FUZZ_TIMES {
        let board = random_board(&mut prng);
        let counts = board.piece_counts();
        for mv in legal_moves(&board) {
            let next = board.apply(&mv).unwrap();
            assert_eq!(next.piece_counts(), counts);
        }
    }
}

#[test]
fn move_order_is_row_major_then_direction_table() {
    let board = Board::parse("K./.R").unwrap();
    let moves = legal_moves(&board);

    let expected = vec![
        Move {
            from: Coord::new(0, 0),
            to: Coord::new(0, 1),
            kind: PieceKind::King,
        },
        Move {
            from: Coord::new(0, 0),
            to: Coord::new(1, 0),
            kind: PieceKind::King,
        },
        Move {
            from: Coord::new(1, 1),
            to: Coord::new(0, 1),
            kind: PieceKind::Rook,
        },
        Move {
            from: Coord::new(1, 1),
            to: Coord::new(1, 0),
            kind: PieceKind::Rook,
        },
    ];
    assert_eq!(moves, expected);
}

#[test]
fn move_generation_is_repeatable() {
    let mut prng = deterministic_prng();
    for _ in 0..50 {
        let board = random_board(&mut prng);
        assert_eq!(legal_moves(&board), legal_moves(&board));
    }
}

#[test]
fn sliders_stop_at_the_first_occupied_cell() {
    // Rook at (0,0), blocker at (0,2): only (0,1) is reachable rightward.
    let board = Board::parse("R.B./....").unwrap();
    let rook_targets: Vec<Coord> = legal_moves(&board)
        .into_iter()
        .filter(|mv| mv.kind == PieceKind::Rook && mv.from == Coord::new(0, 0))
        .map(|mv| mv.to)
        .collect();

    assert!(rook_targets.contains(&Coord::new(0, 1)));
    assert!(!rook_targets.contains(&Coord::new(0, 2)), "occupied");
    assert!(!rook_targets.contains(&Coord::new(0, 3)), "behind blocker");
}
