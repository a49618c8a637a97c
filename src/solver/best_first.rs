use crate::heuristic::Heuristic;
use crate::solver::{Algorithm, RankKey, SearchNode, Solver};

/// Greedy best-first search: ranks by the heuristic alone. Fast, but the path is not
/// guaranteed to be the shortest.
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver {
    pub heuristic: Heuristic,
}

impl BestFirstSolver {
    pub fn new(heuristic: Heuristic) -> BestFirstSolver {
        BestFirstSolver { heuristic }
    }
}

impl Solver for BestFirstSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFirst
    }

    fn heuristic(&self) -> Option<Heuristic> {
        Some(self.heuristic)
    }

    fn rank(&self, node: &SearchNode) -> RankKey {
        RankKey::new(node.h, 0)
    }
}
