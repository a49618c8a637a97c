use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::path_length;

pub mod astar;
pub mod best_first;
pub mod context;
pub mod uniform_cost;

use astar::AstarSolver;
use best_first::BestFirstSolver;
use context::{SearchContext, Step};
use uniform_cost::UniformCostSolver;

/// A discovered cell together with its cost from the start (`g`, unit edge cost) and the
/// estimated distance to the nearest goal (`h`, 0 for solvers without a heuristic).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub coord: Coord,
    pub g: u32,
    pub h: f64,
}

impl SearchNode {
    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
}

/// Frontier ordering key, smaller is expanded first. `primary` is compared with
/// [f64::total_cmp], then `tie`. Remaining ties fall back to frontier insertion order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankKey {
    pub primary: f64,
    pub tie: usize,
}

impl RankKey {
    pub fn new(primary: f64, tie: usize) -> RankKey {
        RankKey { primary, tie }
    }

    pub fn compare(&self, other: &RankKey) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then(self.tie.cmp(&other.tie))
    }
}

/// Result of a successful search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// The goal the search terminated at.
    pub goal: Coord,
    /// Cells from start to `goal`, both inclusive.
    pub path: Vec<Coord>,
    /// Number of expansions, the goal expansion included.
    pub expanded: usize,
    /// Number of cells first inserted into the frontier, the start excluded.
    pub discovered: usize,
}

impl SearchOutcome {
    /// Edge count of the path.
    pub fn steps(&self) -> usize {
        path_length(&self.path)
    }
}

/// The ranking capability that distinguishes the search algorithms. The frontier-driven loop
/// itself lives in [SearchContext] and is shared by all of them.
pub trait Solver: fmt::Debug {
    fn algorithm(&self) -> Algorithm;

    /// Heuristic used to fill in `h`, [None] if the solver ranks on path cost alone.
    fn heuristic(&self) -> Option<Heuristic>;

    fn rank(&self, node: &SearchNode) -> RankKey;

    /// Runs a search to completion without a session or observer. Returns [None] if no goal is
    /// reachable from `start`.
    fn find_path(
        &self,
        grid: &Grid,
        start: Coord,
        goals: &[Coord],
    ) -> Result<Option<SearchOutcome>, SearchError>
    where
        Self: Sized,
    {
        if goals.is_empty() {
            return Err(SearchError::NoGoals);
        }
        grid.check_bounds(start)?;
        for goal in goals {
            grid.check_bounds(*goal)?;
        }
        let mut ct = SearchContext::new(self, start, goals);
        loop {
            match ct.step(grid, &mut ()) {
                Step::Expanded(_) => {}
                Step::Found(outcome) => return Ok(Some(outcome)),
                Step::Exhausted => return Ok(None),
            }
        }
    }
}

impl<S: Solver + ?Sized> Solver for &S {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }
    fn heuristic(&self) -> Option<Heuristic> {
        (**self).heuristic()
    }
    fn rank(&self, node: &SearchNode) -> RankKey {
        (**self).rank(node)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }
    fn heuristic(&self) -> Option<Heuristic> {
        (**self).heuristic()
    }
    fn rank(&self, node: &SearchNode) -> RankKey {
        (**self).rank(node)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    AStar,
    UniformCost,
    BestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::UniformCost, Algorithm::BestFirst];

    /// The solver for this algorithm. `heuristic` is ignored by uniform-cost search.
    pub fn solver(self, heuristic: Heuristic) -> Box<dyn Solver> {
        match self {
            Algorithm::AStar => Box::new(AstarSolver::new(heuristic)),
            Algorithm::UniformCost => Box::new(UniformCostSolver),
            Algorithm::BestFirst => Box::new(BestFirstSolver::new(heuristic)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "ucs" | "uniform-cost" | "uniformcost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "bestfirst" | "best-first" | "greedy" => Ok(Algorithm::BestFirst),
            _ => Err(SearchError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::AStar => "astar",
            Algorithm::UniformCost => "ucs",
            Algorithm::BestFirst => "bestfirst",
        })
    }
}

/// Algorithm and heuristic selection for one search. Defaults to A* with the Manhattan
/// heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, heuristic: Heuristic) -> SearchConfig {
        SearchConfig {
            algorithm,
            heuristic,
        }
    }

    /// Parses a selection by name. A missing heuristic means Manhattan; an unrecognised one is
    /// an error.
    pub fn from_names(algorithm: &str, heuristic: Option<&str>) -> Result<SearchConfig, SearchError> {
        Ok(SearchConfig {
            algorithm: algorithm.parse()?,
            heuristic: heuristic.map(str::parse::<Heuristic>).transpose()?.unwrap_or_default(),
        })
    }

    pub fn solver(&self) -> Box<dyn Solver> {
        self.algorithm.solver(self.heuristic)
    }
}
