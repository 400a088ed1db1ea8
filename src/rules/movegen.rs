use crate::board::{Board, Move, PieceKind};
use crate::core::coord::{Coord, KING_STEPS};

/// Enumerate every legal move on `board`.
///
/// Pieces are visited in row-major order and each kind walks its direction
/// table in a fixed order, so the returned sequence is deterministic; the
/// depth-first strategies' tie-breaks rely on this exact ordering.
///
/// No move targets an occupied or out-of-bounds cell, and sliding pieces
/// never pass through an occupied cell (there are no captures).
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::new();

    for (from, kind) in board.occupied_cells() {
        match kind {
            PieceKind::King => {
                for step in KING_STEPS {
                    let to = from + step;
                    if board.in_bounds(to) && board.get(to).is_none() {
                        out.push(Move { from, to, kind });
                    }
                }
            }
            PieceKind::Bishop | PieceKind::Rook => {
                gen_sliding(board, from, kind, &mut out);
            }
        }
    }

    out
}

/// Walk each ray outward from `from`: every empty cell is a target, and the
/// ray stops at the first occupied cell or the board edge.
fn gen_sliding(board: &Board, from: Coord, kind: PieceKind, out: &mut Vec<Move>) {
    for dir in kind.slide_dirs() {
        let mut cur = from + *dir;
        while board.in_bounds(cur) {
            if board.get(cur).is_some() {
                break;
            }
            out.push(Move {
                from,
                to: cur,
                kind,
            });
            cur = cur + *dir;
        }
    }
}
