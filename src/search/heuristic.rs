use crate::board::Board;

/// Distance estimate consumed by the best-first strategy.
///
/// Implementations estimate the remaining cost from `board` to `target`; the
/// estimate must be 0-or-positive and should shrink as boards converge. The
/// search loop is generic over this seam, so swapping estimators never
/// touches it.
pub trait HeuristicLike {
    fn estimate(&self, board: &Board, target: &Board) -> u32;
}

/// Sums, for every occupied cell, the Manhattan distance to **every** cell of
/// the target holding the same kind, not only the nearest one.
///
/// Not admissible: when a kind occupies more than one target cell the sum
/// overestimates (it is even nonzero on matched boards), so best-first search
/// driven by it carries no optimality guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTargetsManhattan;

impl HeuristicLike for AllTargetsManhattan {
    fn estimate(&self, board: &Board, target: &Board) -> u32 {
        let mut total = 0u32;
        for (from, kind) in board.occupied_cells() {
            for (to, target_kind) in target.occupied_cells() {
                if target_kind == kind {
                    total += (to - from).manhattan_norm() as u32;
                }
            }
        }
        total
    }
}

/// Sums, for every occupied cell, the Manhattan distance to the *nearest*
/// same-kind target cell. Zero exactly on matched boards.
///
/// Still an approximation (sliding pieces cover several cells per move), but
/// it never counts a piece against target cells it does not need to reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestTargetManhattan;

impl HeuristicLike for NearestTargetManhattan {
    fn estimate(&self, board: &Board, target: &Board) -> u32 {
        let mut total = 0u32;
        for (from, kind) in board.occupied_cells() {
            let nearest = target
                .occupied_cells()
                .filter(|(_, target_kind)| *target_kind == kind)
                .map(|(to, _)| (to - from).manhattan_norm() as u32)
                .min();
            total += nearest.unwrap_or(0);
        }
        total
    }
}
