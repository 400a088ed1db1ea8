use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::board::Move;
use crate::puzzle::{NoSolution, Puzzle, SearchError, SearchReport, SearchStats};
use crate::rules::movegen::legal_moves;

/// Per-attempt move budget of [`solve_random`].
pub const DEFAULT_MOVE_BUDGET: usize = 20;

/// Randomized trial-and-error with the fixed 20-move budget per attempt.
///
/// See [`solve_random_bounded`] for the semantics.
pub fn solve_random(
    puzzle: &Puzzle,
    attempts: u32,
    seed: u64,
) -> Result<SearchReport, SearchError> {
    solve_random_bounded(puzzle, attempts, DEFAULT_MOVE_BUDGET, seed)
}

/// Randomized trial-and-error with a caller-supplied per-attempt move budget.
///
/// Each attempt starts fresh from the start board and applies up to
/// `move_budget` moves, sampling uniformly from the full candidate list at
/// every step; there is no visited-set pruning, so revisits happen and
/// progress is not guaranteed. The target is checked after every applied
/// move. Attempts share nothing; the first successful one wins.
///
/// Best-effort and incomplete: `BudgetExhausted` may be reported even when a
/// solution exists. The walk is driven by a seeded [`XorShiftRng`], so a
/// fixed seed reproduces the run exactly.
pub fn solve_random_bounded(
    puzzle: &Puzzle,
    attempts: u32,
    move_budget: usize,
    seed: u64,
) -> Result<SearchReport, SearchError> {
    puzzle.validate()?;
    if attempts == 0 {
        return Err(SearchError::InvalidParameter {
            param: "attempts",
            reason: "must be positive".to_string(),
        });
    }
    if move_budget == 0 {
        return Err(SearchError::InvalidParameter {
            param: "move_budget",
            reason: "must be positive".to_string(),
        });
    }

    let mut stats = SearchStats::default();
    if !puzzle.is_feasible() {
        return Ok(SearchReport::not_found(NoSolution::Infeasible, stats));
    }
    if puzzle.start == puzzle.target {
        return Ok(SearchReport::solved(Vec::new(), stats));
    }

    let mut rng = XorShiftRng::seed_from_u64(seed);

    for _ in 0..attempts {
        let mut board = puzzle.start;
        let mut path: Vec<Move> = Vec::new();

        for _ in 0..move_budget {
            let moves = legal_moves(&board);
            stats.generated += moves.len() as u64;
            if moves.is_empty() {
                // Fully blocked position; this attempt can go nowhere.
                break;
            }

            let mv = moves[rng.gen_range(0..moves.len())];
            board = board.apply(&mv)?;
            stats.expanded += 1;
            path.push(mv);

            if board == puzzle.target {
                return Ok(SearchReport::solved(path, stats));
            }
        }
    }

    Ok(SearchReport::not_found(NoSolution::BudgetExhausted, stats))
}
