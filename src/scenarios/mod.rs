//! Built-in demo puzzles (compile-time configs).

use crate::board::Board;
use crate::puzzle::Puzzle;

fn built_in(start: &str, target: &str) -> Puzzle {
    let start = Board::parse(start).expect("built-in start board is well-formed");
    let target = Board::parse(target).expect("built-in target board is well-formed");
    Puzzle::new(start, target).expect("built-in puzzle is well-formed")
}

/// The 2x3 five-piece puzzle: walk the king from the top-left corner to the
/// bottom-right one, putting every other piece back where it started.
///
/// Small enough for tests and fast demos; minimum solution length is 8.
pub fn king_to_corner() -> Puzzle {
    built_in("KBB/RR.", ".BB/RRK")
}

/// One rook sliding across an otherwise empty 2x3 board. Solved in one move.
pub fn rook_shuttle() -> Puzzle {
    built_in("R../...", "..R/...")
}

/// Two bishops swapping opposite corners of a 3x3 board.
pub fn bishop_swap() -> Puzzle {
    built_in("B../.../..B", "..B/.../B..")
}

pub fn available_names() -> Vec<&'static str> {
    vec!["king_to_corner", "rook_shuttle", "bishop_swap"]
}

pub fn by_name(name: &str) -> Option<Puzzle> {
    match name {
        "king_to_corner" => Some(king_to_corner()),
        "rook_shuttle" => Some(rook_shuttle()),
        "bishop_swap" => Some(bishop_swap()),
        _ => None,
    }
}
