use piece_shuffle::puzzle::{Puzzle, SearchError, SearchReport};
use piece_shuffle::scenarios;
use piece_shuffle::search::astar::solve_astar;
use piece_shuffle::search::backtrack::solve_backtracking;
use piece_shuffle::search::bfs::solve_bfs;
use piece_shuffle::search::dfs::solve_dfs;
use piece_shuffle::search::random::{solve_random, solve_random_bounded};

const DEMO_MAX_DEPTH: usize = 32;
const DEMO_ATTEMPTS: u32 = 200;
const DEMO_RANDOM_BUDGET: usize = 40;
const DEMO_SEED: u64 = 7;

const STRATEGIES: &[&str] = &[
    "bfs",
    "dfs",
    "backtracking",
    "random",
    "random-bounded",
    "astar",
];

fn run(strategy: &str, puzzle: &Puzzle) -> Option<Result<SearchReport, SearchError>> {
    match strategy {
        "bfs" => Some(solve_bfs(puzzle)),
        "dfs" => Some(solve_dfs(puzzle, DEMO_MAX_DEPTH)),
        "backtracking" => Some(solve_backtracking(puzzle, DEMO_MAX_DEPTH)),
        "random" => Some(solve_random(puzzle, DEMO_ATTEMPTS, DEMO_SEED)),
        "random-bounded" => Some(solve_random_bounded(
            puzzle,
            DEMO_ATTEMPTS,
            DEMO_RANDOM_BUDGET,
            DEMO_SEED,
        )),
        "astar" => Some(solve_astar(puzzle)),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!(
            "Usage: solve <scenario> <strategy>\n\nAvailable scenarios:\n  - {}\n\nAvailable strategies:\n  - {}",
            scenarios::available_names().join("\n  - "),
            STRATEGIES.join("\n  - ")
        );
        std::process::exit(2);
    }

    let scenario_name = &args[1];
    let strategy_name = &args[2];

    let Some(puzzle) = scenarios::by_name(scenario_name) else {
        eprintln!(
            "Unknown scenario: {scenario_name}\n\nAvailable scenarios:\n  - {}",
            scenarios::available_names().join("\n  - ")
        );
        std::process::exit(2);
    };

    let Some(result) = run(strategy_name, &puzzle) else {
        eprintln!(
            "Unknown strategy: {strategy_name}\n\nAvailable strategies:\n  - {}",
            STRATEGIES.join("\n  - ")
        );
        std::process::exit(2);
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Search failed for {scenario_name}/{strategy_name}: {e}");
            std::process::exit(1);
        }
    };

    let out = serde_json::json!({
        "scenario": scenario_name,
        "strategy": strategy_name,
        "start": puzzle.start.to_string(),
        "target": puzzle.target.to_string(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}
