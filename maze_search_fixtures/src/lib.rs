//! Seeded maze generators producing row-major wall matrices (`true` = wall), used by the tests,
//! benchmarks and demos of `maze_search`.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Wall probability of [uniform_random] mazes when nothing else is asked for.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every cell independently becomes a wall with probability `wall_probability`.
pub fn uniform_random<R: Rng>(
    rows: usize,
    cols: usize,
    wall_probability: f64,
    rng: &mut R,
) -> Vec<Vec<bool>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(wall_probability)).collect())
        .collect()
}

/// Carves a perfect maze with a randomised depth-first walk. Cells with even row and column are
/// rooms, all of which end up connected by exactly one route; (0, 0) is always open.
pub fn recursive_backtracker<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Vec<Vec<bool>> {
    let mut walls = vec![vec![true; cols]; rows];
    if rows == 0 || cols == 0 {
        return walls;
    }
    walls[0][0] = false;
    let mut stack = vec![(0usize, 0usize)];
    while let Some(&(row, col)) = stack.last() {
        let mut options: Vec<(usize, usize, usize, usize)> = Vec::with_capacity(4);
        if row >= 2 {
            options.push((row - 2, col, row - 1, col));
        }
        if row + 2 < rows {
            options.push((row + 2, col, row + 1, col));
        }
        if col >= 2 {
            options.push((row, col - 2, row, col - 1));
        }
        if col + 2 < cols {
            options.push((row, col + 2, row, col + 1));
        }
        options.retain(|&(r, c, _, _)| walls[r][c]);
        match options.choose(rng) {
            Some(&(r, c, between_r, between_c)) => {
                walls[between_r][between_c] = false;
                walls[r][c] = false;
                stack.push((r, c));
            }
            None => {
                stack.pop();
            }
        }
    }
    walls
}

/// Renders a wall matrix with `#` for walls and `.` for paths.
pub fn render(walls: &[Vec<bool>]) -> String {
    walls
        .iter()
        .map(|row| {
            row.iter()
                .map(|&w| if w { '#' } else { '.' })
                .collect::<String>()
                + "\n"
        })
        .collect()
}
