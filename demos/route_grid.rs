//! Route a net across a small text board and print the result.
//!
//! Run: cargo run --bin route-grid [seed]
//!
//! Without a seed, ties are broken with fresh entropy and the drawn seed is
//! printed so the run can be repeated.

use pcbroute_demos::TextBoard;
use pcbroute_search::{Router, SearchConfig, SeedState, Weights};

const BOARD: &str = "
S.........#.........
..........#.........
..######..#..####...
.......#..#.....#...
.......#........#.D.
.......#######..#...
................#...
..........#.........
";

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(2);
        }
    };

    let board = match TextBoard::parse(BOARD) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut seed = SeedState::new(seed);
    let mut router = Router::new(SearchConfig::default());
    match router.search(
        &board,
        board.source(),
        board.destinations(),
        board.obstacles(),
        Weights::UNIT,
        &mut seed,
    ) {
        Ok(path) => {
            print!("{}", board.render(path.shapes()));
            let stats = path.stats();
            println!(
                "cost {} | {} expansions, {} generated, {} pruned, peak frontier {} | seed {}",
                path.cost(),
                stats.expansions,
                stats.generated,
                stats.pruned,
                stats.peak_frontier,
                seed.seed()
            );
        }
        Err(e) => {
            print!("{}", board.render(&[]));
            println!("{e} | seed {}", seed.seed());
            std::process::exit(1);
        }
    }
}
