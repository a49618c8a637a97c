use maze_search::{
    Algorithm, Coord, Grid, Heuristic, SearchConfig, SearchObserver, Session, DEFAULT_STEP_DELAY,
};
use maze_search_fixtures::{recursive_backtracker, seeded};
use std::time::Duration;

// Carves a 9x9 maze, places the start in the bottom-right corner and goals in the two top
// corners, then animates every algorithm in turn. Pass `--slow` to use the default
// half-second delay between expansions.

struct Printer;

impl SearchObserver for Printer {
    fn on_explored(&mut self, coord: Coord, step: usize) {
        println!("  #{step:<3} explored {coord}");
    }
    fn on_path_found(&mut self, path: &[Coord], steps: usize) {
        let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
        println!("  path found in {steps} steps: {}", cells.join(" -> "));
    }
    fn on_exhausted(&mut self) {
        println!("  no path exists");
    }
    fn on_cancelled(&mut self) {
        println!("  cancelled");
    }
}

fn main() {
    let delay = if std::env::args().any(|a| a == "--slow") {
        DEFAULT_STEP_DELAY
    } else {
        Duration::from_millis(20)
    };
    let walls = recursive_backtracker(9, 9, &mut seeded(7));
    let grid = Grid::from_walls(&walls).unwrap();
    let mut session = Session::with_observer(grid, Coord::new(8, 8), Printer).unwrap();
    session.add_goal(Coord::new(0, 0)).unwrap();
    session.add_goal(Coord::new(0, 8)).unwrap();
    println!("{}", session);

    for algorithm in Algorithm::ALL {
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            if algorithm == Algorithm::UniformCost && heuristic == Heuristic::Euclidean {
                continue;
            }
            println!("{algorithm} / {heuristic}");
            session.reset_search_state();
            session
                .start_search(SearchConfig::new(algorithm, heuristic))
                .unwrap();
            session.run_paced(delay, |_| false);
            let stats = session.stats();
            println!(
                "  expanded {}, discovered {}\n\n{}",
                stats.expanded, stats.discovered, session
            );
        }
    }
}
