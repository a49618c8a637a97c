/// Fuzzes the search engine on many random grids: a path must be found exactly when the goal is
/// reachable, optimal algorithms must match a breadth-first reference distance, and repeated
/// runs must explore in the same order.
use itertools::Itertools;
use maze_search::{Algorithm, Coord, EventLog, Grid, Heuristic, SearchConfig, SearchStatus, Session, Solver};
use maze_search_fixtures::{render, seeded, uniform_random};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng, start: Coord, end: Coord) -> (Grid, Vec<Vec<bool>>) {
    let mut walls = uniform_random(n, n, 0.4, rng);
    walls[start.row][start.col] = false;
    walls[end.row][end.col] = false;
    (Grid::from_walls(&walls).unwrap(), walls)
}

/// Breadth-first edge distance from `start` to every cell.
fn bfs_distances(grid: &Grid, start: Coord) -> Vec<Vec<Option<usize>>> {
    let mut dist = vec![vec![None; grid.cols()]; grid.rows()];
    dist[start.row][start.col] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist[p.row][p.col].unwrap();
        for n in grid.neighbors(p) {
            if dist[n.row][n.col].is_none() {
                dist[n.row][n.col] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn assert_valid_path(grid: &Grid, path: &[Coord]) {
    for p in path {
        assert!(grid.is_passable(*p), "path crosses wall at {p}");
    }
    for (a, b) in path.iter().tuple_windows() {
        assert_eq!(a.manhattan_distance(b), 1, "path jumps from {a} to {b}");
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let (mut grid, walls) = random_grid(N, &mut rng, start, end);
        grid.update();
        let reachable = grid.reachable(start, end);
        for algorithm in Algorithm::ALL {
            let outcome = algorithm
                .solver(Heuristic::Manhattan)
                .find_path(&grid, start, &[end])
                .unwrap();
            // Show the grid if a path is not found
            if outcome.is_some() != reachable {
                println!("{algorithm}\n{}", render(&walls));
            }
            assert_eq!(outcome.is_some(), reachable);
            if let Some(outcome) = outcome {
                assert_eq!(outcome.path.first(), Some(&start));
                assert_eq!(outcome.path.last(), Some(&end));
                assert_valid_path(&grid, &outcome.path);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 5;
    const N_GRIDS: usize = 5000;
    let mut rng = seeded(1);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    let optimal = [
        SearchConfig::new(Algorithm::AStar, Heuristic::Manhattan),
        SearchConfig::new(Algorithm::AStar, Heuristic::Euclidean),
        SearchConfig::new(Algorithm::UniformCost, Heuristic::Manhattan),
    ];
    for _ in 0..N_GRIDS {
        let (grid, walls) = random_grid(N, &mut rng, start, end);
        let reference = bfs_distances(&grid, start)[end.row][end.col];
        for config in optimal {
            let steps = config
                .solver()
                .find_path(&grid, start, &[end])
                .unwrap()
                .map(|o| o.steps());
            if steps != reference {
                println!("{config:?}: {steps:?} vs {reference:?}\n{}", render(&walls));
            }
            assert_eq!(steps, reference);
        }
        // Greedy search finds some path whenever one exists, never a shorter one.
        let greedy = Algorithm::BestFirst
            .solver(Heuristic::Manhattan)
            .find_path(&grid, start, &[end])
            .unwrap()
            .map(|o| o.steps());
        assert_eq!(greedy.is_some(), reference.is_some());
        assert!(greedy >= reference);
    }
}

#[test]
fn fuzz_two_goals_reach_the_nearest() {
    const N: usize = 6;
    const N_GRIDS: usize = 2000;
    let mut rng = seeded(2);
    for _ in 0..N_GRIDS {
        let start = Coord::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let goals = [
            Coord::new(rng.gen_range(0..N), rng.gen_range(0..N)),
            Coord::new(rng.gen_range(0..N), rng.gen_range(0..N)),
        ];
        let mut walls = uniform_random(N, N, 0.3, &mut rng);
        for p in goals.iter().chain([&start]) {
            walls[p.row][p.col] = false;
        }
        let grid = Grid::from_walls(&walls).unwrap();
        let dist = bfs_distances(&grid, start);
        let nearest = goals.iter().filter_map(|g| dist[g.row][g.col]).min();
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let outcome = Algorithm::AStar
                .solver(heuristic)
                .find_path(&grid, start, &goals)
                .unwrap();
            assert_eq!(outcome.as_ref().map(|o| o.steps()), nearest);
            if let Some(outcome) = outcome {
                assert!(goals.contains(&outcome.goal));
                assert_eq!(outcome.path.last(), Some(&outcome.goal));
                assert_eq!(dist[outcome.goal.row][outcome.goal.col], nearest);
                assert_valid_path(&grid, &outcome.path);
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = seeded(4);
    for _ in 0..200 {
        let walls = uniform_random(9, 9, 0.3, &mut rng);
        for algorithm in Algorithm::ALL {
            for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
                let run = || {
                    let grid = Grid::from_walls(&walls).unwrap();
                    let mut session =
                        Session::with_observer(grid, Coord::new(8, 8), EventLog::default())
                            .unwrap();
                    session.add_goal(Coord::new(0, 0)).unwrap();
                    session.add_goal(Coord::new(0, 8)).unwrap();
                    session
                        .start_search(SearchConfig::new(algorithm, heuristic))
                        .unwrap();
                    let status = session.run_to_completion();
                    assert_ne!(status, SearchStatus::Running);
                    session.observer().clone()
                };
                assert_eq!(run(), run());
            }
        }
    }
}
