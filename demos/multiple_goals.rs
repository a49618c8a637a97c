use maze_search::{Algorithm, Coord, Grid, Heuristic, Solver};

// In this example a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - # marks a wall
// - S marks the start
// - G marks a goal
// The search stops at the goal it reaches first, which is the top one.

fn main() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_wall(Coord::new(1, 1), true).unwrap();
    println!("{}", grid);
    let start = Coord::new(0, 0);
    let goals = [Coord::new(0, 2), Coord::new(2, 2)];
    let outcome = Algorithm::AStar
        .solver(Heuristic::Manhattan)
        .find_path(&grid, start, &goals)
        .unwrap()
        .unwrap();
    println!("Selected goal: {}\n", outcome.goal);
    println!("Path ({} steps):", outcome.steps());
    for p in outcome.path {
        println!("{}", p);
    }
}
