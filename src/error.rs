use thiserror::Error;

use crate::coord::Coord;

/// Synchronous rejections. Exhaustion, cancellation and a start request while a search is
/// already running are normal outcomes and are reported elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unknown algorithm '{0}' (expected astar, ucs or bestfirst)")]
    UnknownAlgorithm(String),
    #[error("unknown heuristic '{0}' (expected manhattan or euclidean)")]
    UnknownHeuristic(String),
    #[error("no goal has been set")]
    NoGoals,
    #[error("{coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("the grid cannot be edited while a search is running")]
    SearchRunning,
    #[error("{0} holds the start or a goal and cannot become a wall")]
    EndpointWall(Coord),
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
