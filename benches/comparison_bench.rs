use criterion::{criterion_group, criterion_main, Criterion};
use maze_search::{Algorithm, Coord, Grid, Heuristic, SearchConfig, Solver};
use maze_search_fixtures::{recursive_backtracker, seeded, uniform_random, DEFAULT_WALL_PROBABILITY};
use std::hint::black_box;

const CONFIGS: [SearchConfig; 5] = [
    SearchConfig {
        algorithm: Algorithm::AStar,
        heuristic: Heuristic::Manhattan,
    },
    SearchConfig {
        algorithm: Algorithm::AStar,
        heuristic: Heuristic::Euclidean,
    },
    SearchConfig {
        algorithm: Algorithm::UniformCost,
        heuristic: Heuristic::Manhattan,
    },
    SearchConfig {
        algorithm: Algorithm::BestFirst,
        heuristic: Heuristic::Manhattan,
    },
    SearchConfig {
        algorithm: Algorithm::BestFirst,
        heuristic: Heuristic::Euclidean,
    },
];

fn bench_mazes<F>(c: &mut Criterion, name: &str, make: F)
where
    F: Fn(u64) -> Vec<Vec<bool>>,
{
    let grids: Vec<Grid> = (0..32)
        .map(|seed| {
            let mut walls = make(seed);
            let last = walls.len() - 1;
            walls[0][0] = false;
            walls[last][last] = false;
            Grid::from_walls(&walls).unwrap()
        })
        .collect();
    let start = Coord::new(0, 0);
    let goal = Coord::new(grids[0].rows() - 1, grids[0].cols() - 1);
    for config in CONFIGS {
        let solver = config.solver();
        c.bench_function(
            format!("{name}, {} ({})", config.algorithm, config.heuristic).as_str(),
            |b| {
                b.iter(|| {
                    for grid in &grids {
                        black_box(solver.find_path(grid, start, &[goal]).unwrap());
                    }
                })
            },
        );
    }
}

fn random_mazes(c: &mut Criterion) {
    bench_mazes(c, "uniform 64x64", |seed| {
        uniform_random(64, 64, DEFAULT_WALL_PROBABILITY, &mut seeded(seed))
    });
}

fn backtracker_mazes(c: &mut Criterion) {
    bench_mazes(c, "backtracker 65x65", |seed| {
        recursive_backtracker(65, 65, &mut seeded(seed))
    });
}

criterion_group!(benches, random_mazes, backtracker_mazes);
criterion_main!(benches);
