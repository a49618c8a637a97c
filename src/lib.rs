//! # maze_search
//!
//! Stepwise grid search for interactive maze visualisation. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm#Practical_optimizations_and_infinite_graphs)
//! and [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search) over a
//! 4-connected grid with unit edge costs, towards the nearest of up to [MAX_GOALS] goals.
//!
//! Searches advance one expansion at a time so that every explored cell can be reported (and
//! animated) before the next one is chosen. A [Session] owns the editable maze and the state
//! machine of at most one running search; [Solver::find_path] runs a search to completion
//! without one.
pub mod coord;
pub mod error;
pub mod goals;
pub mod grid;
pub mod heuristic;
pub mod observer;
pub mod path;
pub mod session;
pub mod solver;

use std::time::Duration;

pub use coord::Coord;
pub use error::SearchError;
pub use goals::GoalSet;
pub use grid::Grid;
pub use heuristic::Heuristic;
pub use observer::{EventLog, SearchEvent, SearchObserver};
pub use session::{Launch, SearchStats, SearchStatus, Session};
pub use solver::{Algorithm, SearchConfig, SearchOutcome, Solver};

/// Number of goals a [GoalSet] holds before evicting the oldest.
pub const MAX_GOALS: usize = 2;

/// Pause between two expansions when animating a search.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Number of moves along a path, i.e. one less than its number of cells. 0 for an empty path.
pub fn path_length(path: &[Coord]) -> usize {
    path.len().saturating_sub(1)
}
