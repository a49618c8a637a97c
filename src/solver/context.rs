//! The frontier-driven search loop shared by all solvers. A [SearchContext] holds the
//! per-search state (frontier, closed set, predecessor map with best known costs) and advances
//! by exactly one expansion per [step](SearchContext::step), so callers can pace, interleave
//! rendering or abandon the search between any two expansions.
use fxhash::FxHashSet;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, info, trace, warn};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::observer::SearchObserver;
use crate::path::{reconstruct, FxIndexMap, PredecessorMap};
use crate::solver::{RankKey, SearchNode, SearchOutcome, Solver};
use crate::MAX_GOALS;

struct FrontierEntry {
    key: RankKey,
    seq: u64,
    node: SearchNode,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum, so both comparisons are reversed: smallest rank first,
        // then the earliest inserted.
        match other.key.compare(&self.key) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Outcome of a single expansion.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// A non-goal cell was expanded; the search continues.
    Expanded(Coord),
    Found(SearchOutcome),
    Exhausted,
}

pub struct SearchContext<S> {
    solver: S,
    start: Coord,
    goals: SmallVec<[Coord; MAX_GOALS]>,
    to_see: BinaryHeap<FrontierEntry>,
    /// Frontier membership: insertion sequence and current cost of every open cell.
    open: FxIndexMap<Coord, (u64, u32)>,
    closed: FxHashSet<Coord>,
    parents: PredecessorMap,
    next_seq: u64,
    expanded: usize,
    discovered: usize,
}

impl<S: Solver> SearchContext<S> {
    /// Seeds the frontier with the start cell at cost 0.
    pub fn new(solver: S, start: Coord, goals: &[Coord]) -> SearchContext<S> {
        let goals: SmallVec<[Coord; MAX_GOALS]> = goals.iter().copied().collect();
        info!(
            "Starting {} search from {} towards {:?}",
            solver.algorithm(),
            start,
            goals.as_slice()
        );
        let mut ct = SearchContext {
            solver,
            start,
            goals,
            to_see: BinaryHeap::new(),
            open: FxIndexMap::default(),
            closed: FxHashSet::default(),
            parents: PredecessorMap::default(),
            next_seq: 1,
            expanded: 0,
            discovered: 0,
        };
        let node = SearchNode {
            coord: start,
            g: 0,
            h: ct.estimate(&start),
        };
        ct.parents.insert(start, (usize::MAX, 0));
        ct.open.insert(start, (0, 0));
        ct.to_see.push(FrontierEntry {
            key: ct.solver.rank(&node),
            seq: 0,
            node,
        });
        ct
    }

    /// Number of expansions performed so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of cells inserted into the frontier so far, the start excluded. Cells whose cost
    /// was improved while already in the frontier are counted once.
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Start and goal cells are passable even if the grid marks them as walls.
    fn passable(&self, grid: &Grid, coord: Coord) -> bool {
        grid.is_passable(coord)
            || (grid.in_bounds(coord) && (coord == self.start || self.goals.contains(&coord)))
    }

    /// Nearest-goal estimate, 0 for solvers without a heuristic.
    fn estimate(&self, coord: &Coord) -> f64 {
        self.solver
            .heuristic()
            .map_or(0.0, |h| h.nearest(coord, &self.goals))
    }

    /// Performs one expansion. Once [Found](Step::Found) or [Exhausted](Step::Exhausted) has
    /// been returned the context is spent and should be dropped.
    pub fn step<O>(&mut self, grid: &Grid, observer: &mut O) -> Step
    where
        O: SearchObserver + ?Sized,
    {
        let node = loop {
            let Some(FrontierEntry { node, .. }) = self.to_see.pop() else {
                warn!(
                    "No goal reachable from {} after {} expansions",
                    self.start, self.expanded
                );
                observer.on_exhausted();
                return Step::Exhausted;
            };
            // A cell is pushed again whenever a cheaper way to reach it is found. Only the
            // entry carrying its current cost is live, the others are discarded.
            match self.open.get(&node.coord) {
                Some(&(_, g)) if g == node.g => {
                    self.open.swap_remove(&node.coord);
                    break node;
                }
                _ => continue,
            }
        };

        self.closed.insert(node.coord);
        let step_index = self.expanded;
        self.expanded += 1;
        debug!(
            "Exploring {} - g: {}, h: {}, f: {}",
            node.coord,
            node.g,
            node.h,
            node.f()
        );
        observer.on_explored(node.coord, step_index);

        if self.goals.contains(&node.coord) {
            let path = reconstruct(&self.parents, node.coord);
            let outcome = SearchOutcome {
                goal: node.coord,
                path,
                expanded: self.expanded,
                discovered: self.discovered,
            };
            info!(
                "Goal {} reached in {} steps after {} expansions",
                outcome.goal,
                outcome.steps(),
                outcome.expanded
            );
            observer.on_path_found(&outcome.path, outcome.steps());
            return Step::Found(outcome);
        }

        // Every frontier cell is recorded in the predecessor map when it is pushed.
        let parent_index = self
            .parents
            .get_index_of(&node.coord)
            .unwrap_or(usize::MAX);
        let g = node.g + 1;
        let successors = grid.neighbors_where(node.coord, |n| {
            !self.closed.contains(&n) && self.passable(grid, n)
        });
        for successor in successors {
            match self.parents.entry(successor) {
                Vacant(e) => {
                    e.insert((parent_index, g));
                }
                Occupied(mut e) => {
                    if e.get().1 > g {
                        e.insert((parent_index, g));
                    } else {
                        continue;
                    }
                }
            }
            let next = SearchNode {
                coord: successor,
                g,
                h: self.estimate(&successor),
            };
            let seq = match self.open.get_mut(&successor) {
                // Improved in place: keeps its insertion order and is not counted again.
                Some(entry) => {
                    entry.1 = g;
                    entry.0
                }
                None => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    self.open.insert(successor, (seq, g));
                    self.discovered += 1;
                    seq
                }
            };
            trace!(
                "  Neighbour {} - g: {}, h: {}, f: {}",
                successor,
                next.g,
                next.h,
                next.f()
            );
            self.to_see.push(FrontierEntry {
                key: self.solver.rank(&next),
                seq,
                node: next,
            });
        }
        Step::Expanded(node.coord)
    }
}
