use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coord::Coord;
use crate::error::SearchError;

/// Fixed expansion order: up, down, left, right. Equal-cost expansions resolve according to it.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// [Grid] holds the wall matrix of a maze in a [BoolGrid] (`true` = Wall, `false` = Path) and
/// keeps track of 4-connected components of Path cells using a [UnionFind] structure.
/// Columns map to the x axis of the underlying grid and rows to the y axis.
#[derive(Clone, Debug)]
pub struct Grid {
    walls: BoolGrid,
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// An all-Path grid.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, SearchError> {
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidDimensions { rows, cols });
        }
        let mut grid = Grid {
            walls: BoolGrid::new(cols, rows, false),
            rows,
            cols,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from a row-major wall matrix. All rows must have the same, non-zero length.
    pub fn from_walls<R: AsRef<[bool]>>(walls: &[R]) -> Result<Grid, SearchError> {
        let rows = walls.len();
        let cols = walls.first().map_or(0, |r| r.as_ref().len());
        if walls.iter().any(|r| r.as_ref().len() != cols) {
            return Err(SearchError::InvalidDimensions { rows, cols });
        }
        let mut grid = Grid::new(rows, cols)?;
        for (row, line) in walls.iter().enumerate() {
            for (col, &wall) in line.as_ref().iter().enumerate() {
                grid.walls.set(col as i32, row as i32, wall);
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Returns an [OutOfBounds](SearchError::OutOfBounds) error for coordinates off the grid.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), SearchError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Out-of-bounds coordinates are not walls, but they are not passable either.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.walls.get(coord.col as i32, coord.row as i32)
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.walls.get(coord.col as i32, coord.row as i32)
    }

    /// Updates a cell. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), SearchError> {
        self.check_bounds(coord)?;
        let was_wall = self.is_wall(coord);
        self.walls.set(coord.col as i32, coord.row as i32, wall);
        if wall {
            if !was_wall {
                self.components_dirty = true;
            }
        } else {
            let ix = self.ix(coord);
            for n in self.neighbors(coord) {
                self.components.union(ix, self.ix(n));
            }
        }
        Ok(())
    }

    /// Flips a cell between Wall and Path, returning the new state (`true` = Wall).
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, SearchError> {
        let wall = !self.is_wall(coord);
        self.set_wall(coord, wall)?;
        Ok(wall)
    }

    /// In-bounds neighbours of `coord` in up, down, left, right order, keeping only those for
    /// which `keep` returns `true`.
    pub fn neighbors_where<F>(&self, coord: Coord, keep: F) -> SmallVec<[Coord; 4]>
    where
        F: Fn(Coord) -> bool,
    {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(|&n| self.in_bounds(n) && keep(n))
            .collect()
    }

    /// Passable neighbours of `coord` in up, down, left, right order.
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        self.neighbors_where(coord, |n| self.is_passable(n))
    }

    /// Checks if both cells are passable and on the same connected component.
    /// Only meaningful when the components are up to date, see [update](Self::update).
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        self.is_passable(start)
            && self.is_passable(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up 4-connected Path cells.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components of {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = Coord::new(row, col);
                if !self.is_passable(p) {
                    continue;
                }
                // Linking down and right covers every edge once.
                for n in [Coord::new(row + 1, col), Coord::new(row, col + 1)] {
                    if self.is_passable(n) {
                        self.components.union(self.ix(p), self.ix(n));
                    }
                }
            }
        }
    }

    fn ix(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| if self.is_wall(Coord::new(row, col)) { '#' } else { '.' })
                .join("");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
