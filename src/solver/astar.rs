use crate::heuristic::Heuristic;
use crate::solver::{Algorithm, RankKey, SearchNode, Solver};

/// Ranks by `f = g + h`, breaking ties on the smaller row + column sum.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }
}

impl Solver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn heuristic(&self) -> Option<Heuristic> {
        Some(self.heuristic)
    }

    fn rank(&self, node: &SearchNode) -> RankKey {
        RankKey::new(node.f(), node.coord.row_col_sum())
    }
}

#[cfg(test)]
mod tests {
    use crate::coord::Coord;
    use crate::grid::Grid;
    use crate::path_length;

    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let walls = rows
            .iter()
            .map(|r| r.chars().map(|c| c == '#').collect::<Vec<bool>>())
            .collect::<Vec<_>>();
        Grid::from_walls(&walls).unwrap()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = Grid::new(1, 1).unwrap();
        let start = Coord::new(0, 0);
        let outcome = AstarSolver::default()
            .find_path(&grid, start, &[start])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.path, vec![start]);
        assert_eq!(outcome.steps(), 0);
        assert_eq!(outcome.expanded, 1);
    }

    /// Corner to corner on an open 3x3 grid. Ties on f resolve towards the goal's
    /// row + column sum, then to the earlier discovered cell (up before left).
    #[test]
    fn solve_open_three_by_three() {
        let grid = Grid::new(3, 3).unwrap();
        let outcome = AstarSolver::new(Heuristic::Manhattan)
            .find_path(&grid, Coord::new(2, 2), &[Coord::new(0, 0)])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.steps(), 4);
        assert_eq!(
            outcome.path,
            vec![
                Coord::new(2, 2),
                Coord::new(1, 2),
                Coord::new(0, 2),
                Coord::new(0, 1),
                Coord::new(0, 0)
            ]
        );
        assert_eq!(outcome.expanded, 5);
        assert!(outcome.expanded <= 9);
    }

    /// Asserts that the optimal 4 step solution is found around a central wall.
    #[test]
    fn solve_simple_problem() {
        // |S..|
        // |.#.|
        // |..G|
        let grid = grid_from(&["...", ".#.", "..."]);
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let outcome = AstarSolver::new(heuristic)
                .find_path(&grid, Coord::new(0, 0), &[Coord::new(2, 2)])
                .unwrap()
                .unwrap();
            assert_eq!(path_length(&outcome.path), 4);
            assert!(!outcome.path.contains(&Coord::new(1, 1)));
        }
    }

    #[test]
    fn test_multiple_goals() {
        let grid = grid_from(&[".....", ".#...", ".....", ".....", "....."]);
        let (goal_1, goal_2) = (Coord::new(4, 4), Coord::new(3, 3));
        let outcome = AstarSolver::default()
            .find_path(&grid, Coord::new(0, 0), &[goal_1, goal_2])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.goal, goal_2);
        assert_eq!(outcome.steps(), 6);
        assert_eq!(outcome.path.last(), Some(&goal_2));
    }

    #[test]
    fn test_complex() {
        // |S....#....|
        // |.#........|
        // |..........|
        // |..........|
        // |..........|
        // |#.........|
        // |..........|
        // |.......G..|
        // |........#.|
        // |..........|
        let mut grid = Grid::new(10, 10).unwrap();
        for (row, col) in [(1, 1), (0, 5), (5, 0), (8, 8)] {
            grid.set_wall(Coord::new(row, col), true).unwrap();
        }
        let outcome = AstarSolver::default()
            .find_path(&grid, Coord::new(0, 0), &[Coord::new(7, 7)])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.steps(), 14);
    }

    #[test]
    fn walled_off_start_has_no_path() {
        // |S#.|
        // |##.|
        // |..G|
        let grid = grid_from(&[".#.", "##.", "..."]);
        let outcome = AstarSolver::default()
            .find_path(&grid, Coord::new(0, 0), &[Coord::new(2, 2)])
            .unwrap();
        assert!(outcome.is_none());
    }
}
