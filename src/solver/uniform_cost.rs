use crate::heuristic::Heuristic;
use crate::solver::{Algorithm, RankKey, SearchNode, Solver};

/// Ranks by path cost only and never evaluates a heuristic.
#[derive(Clone, Debug, Default)]
pub struct UniformCostSolver;

impl Solver for UniformCostSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn heuristic(&self) -> Option<Heuristic> {
        None
    }

    fn rank(&self, node: &SearchNode) -> RankKey {
        RankKey::new(node.g as f64, 0)
    }
}
