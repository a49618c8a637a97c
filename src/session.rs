use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::Itertools;
use log::{debug, info};
use std::thread;
use std::time::Duration;

use crate::coord::Coord;
use crate::error::SearchError;
use crate::goals::GoalSet;
use crate::grid::Grid;
use crate::observer::SearchObserver;
use crate::solver::context::{SearchContext, Step};
use crate::solver::{SearchConfig, SearchOutcome, Solver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Running,
    Succeeded,
    Exhausted,
}

/// Answer to [start_search](Session::start_search).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    Started,
    /// A search was already running; nothing changed.
    AlreadyRunning,
}

/// Counters of the current or most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub discovered: usize,
    /// Edge count of the found path.
    pub path_steps: Option<usize>,
}

enum Phase {
    Idle,
    Running(Box<SearchContext<Box<dyn Solver>>>),
    Succeeded(SearchOutcome),
    Exhausted,
}

/// An editable maze together with the state of at most one search over it.
///
/// The grid, start and goals persist across searches and can only be edited while no search is
/// running. A search is advanced one expansion at a time with [step](Self::step), or driven by
/// [run_to_completion](Self::run_to_completion) / [run_paced](Self::run_paced). All events go to
/// the session's observer.
pub struct Session<O = ()> {
    grid: Grid,
    start: Coord,
    goals: GoalSet,
    phase: Phase,
    explored: BoolGrid,
    solution: BoolGrid,
    stats: SearchStats,
    observer: O,
}

impl Session {
    pub fn new(grid: Grid, start: Coord) -> Result<Session, SearchError> {
        Session::with_observer(grid, start, ())
    }
}

impl<O> Session<O> {
    pub fn is_explored(&self, coord: Coord) -> bool {
        self.grid.in_bounds(coord) && self.explored.get(coord.col as i32, coord.row as i32)
    }

    pub fn is_solution(&self, coord: Coord) -> bool {
        self.grid.in_bounds(coord) && self.solution.get(coord.col as i32, coord.row as i32)
    }
}

impl<O: SearchObserver> Session<O> {
    /// Creates an idle session. The start cell is cleared of any wall.
    pub fn with_observer(mut grid: Grid, start: Coord, observer: O) -> Result<Self, SearchError> {
        grid.set_wall(start, false)?;
        let (rows, cols) = (grid.rows(), grid.cols());
        Ok(Session {
            grid,
            start,
            goals: GoalSet::new(),
            phase: Phase::Idle,
            explored: BoolGrid::new(cols, rows, false),
            solution: BoolGrid::new(cols, rows, false),
            stats: SearchStats::default(),
            observer,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn status(&self) -> SearchStatus {
        match self.phase {
            Phase::Idle => SearchStatus::Idle,
            Phase::Running(_) => SearchStatus::Running,
            Phase::Succeeded(_) => SearchStatus::Succeeded,
            Phase::Exhausted => SearchStatus::Exhausted,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// The outcome of the most recent search if it succeeded.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match &self.phase {
            Phase::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn ensure_editable(&self) -> Result<(), SearchError> {
        if self.is_running() {
            Err(SearchError::SearchRunning)
        } else {
            Ok(())
        }
    }

    /// Start and goal cells stay Path for as long as they hold that role.
    fn ensure_not_endpoint(&self, coord: Coord) -> Result<(), SearchError> {
        if coord == self.start || self.goals.contains(coord) {
            Err(SearchError::EndpointWall(coord))
        } else {
            Ok(())
        }
    }

    /// Walls on the start or a goal are refused with [SearchError::EndpointWall].
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), SearchError> {
        self.ensure_editable()?;
        if wall {
            self.ensure_not_endpoint(coord)?;
        }
        self.grid.set_wall(coord, wall)
    }

    /// Flips a cell between Wall and Path, returning the new state (`true` = Wall).
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, SearchError> {
        self.ensure_editable()?;
        if !self.grid.is_wall(coord) {
            self.ensure_not_endpoint(coord)?;
        }
        self.grid.toggle_wall(coord)
    }

    /// Moves the start. The new start cell is cleared of any wall.
    pub fn set_start(&mut self, coord: Coord) -> Result<(), SearchError> {
        self.ensure_editable()?;
        self.grid.set_wall(coord, false)?;
        self.start = coord;
        Ok(())
    }

    /// Adds a goal, clearing any wall on it. If two goals are already set the oldest is evicted
    /// and returned; its cell stays Path.
    pub fn add_goal(&mut self, coord: Coord) -> Result<Option<Coord>, SearchError> {
        self.ensure_editable()?;
        self.grid.set_wall(coord, false)?;
        let evicted = self.goals.insert(coord);
        if let Some(old) = evicted {
            debug!("Goal {} evicted by {}", old, coord);
            self.grid.set_wall(old, false)?;
        }
        Ok(evicted)
    }

    pub fn clear_goals(&mut self) -> Result<(), SearchError> {
        self.ensure_editable()?;
        self.goals.clear();
        Ok(())
    }

    /// Checks whether any goal shares a connected component with the start, without searching.
    pub fn any_goal_reachable(&mut self) -> bool {
        self.grid.update();
        self.goals
            .iter()
            .any(|goal| self.grid.reachable(self.start, *goal))
    }

    /// Begins a new search. Configuration problems are rejected before anything changes; a
    /// request while a search is running is ignored.
    pub fn start_search(&mut self, config: SearchConfig) -> Result<Launch, SearchError> {
        if self.is_running() {
            debug!("Search already running, ignoring start request");
            return Ok(Launch::AlreadyRunning);
        }
        if self.goals.is_empty() {
            return Err(SearchError::NoGoals);
        }
        self.grid.check_bounds(self.start)?;
        for goal in self.goals.iter() {
            self.grid.check_bounds(*goal)?;
        }
        info!(
            "Search requested: {} with {} heuristic",
            config.algorithm, config.heuristic
        );
        self.clear_overlays();
        self.stats = SearchStats::default();
        let ct = SearchContext::new(config.solver(), self.start, self.goals.as_slice());
        self.phase = Phase::Running(Box::new(ct));
        Ok(Launch::Started)
    }

    /// Performs one expansion of the running search and returns the resulting status. Does
    /// nothing when no search is running.
    pub fn step(&mut self) -> SearchStatus {
        let (step, expanded, discovered) = match &mut self.phase {
            Phase::Running(ct) => {
                let step = ct.step(&self.grid, &mut self.observer);
                (step, ct.expanded(), ct.discovered())
            }
            _ => return self.status(),
        };
        self.stats.expanded = expanded;
        self.stats.discovered = discovered;
        match step {
            Step::Expanded(coord) => self.mark(coord, false),
            Step::Found(outcome) => {
                self.mark(outcome.goal, false);
                for &cell in &outcome.path {
                    self.mark(cell, true);
                }
                self.stats.path_steps = Some(outcome.steps());
                self.phase = Phase::Succeeded(outcome);
            }
            Step::Exhausted => self.phase = Phase::Exhausted,
        }
        self.status()
    }

    /// Steps until the running search terminates.
    pub fn run_to_completion(&mut self) -> SearchStatus {
        while self.is_running() {
            self.step();
        }
        self.status()
    }

    /// Steps the running search with `delay` between expansions so that the explored events
    /// can be animated. Before every expansion `cancel` is asked whether to abort.
    pub fn run_paced<F>(&mut self, delay: Duration, mut cancel: F) -> SearchStatus
    where
        F: FnMut(&Self) -> bool,
    {
        while self.is_running() {
            if cancel(self) {
                self.cancel_search();
                break;
            }
            if self.step() == SearchStatus::Running && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        self.status()
    }

    /// Aborts a running search, discarding its state. Returns `false` if nothing was running.
    pub fn cancel_search(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        debug!("Cancelling search after {} expansions", self.stats.expanded);
        self.phase = Phase::Idle;
        self.observer.on_cancelled();
        true
    }

    /// Cancels any running search and clears explored and solution marks and counters. Walls,
    /// start and goals are left untouched.
    pub fn reset_search_state(&mut self) {
        self.cancel_search();
        self.phase = Phase::Idle;
        self.clear_overlays();
        self.stats = SearchStats::default();
    }

    fn mark(&mut self, coord: Coord, solution: bool) {
        let (x, y) = (coord.col as i32, coord.row as i32);
        if solution {
            self.solution.set(x, y, true);
        } else {
            self.explored.set(x, y, true);
        }
    }

    fn clear_overlays(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        self.explored = BoolGrid::new(cols, rows, false);
        self.solution = BoolGrid::new(cols, rows, false);
    }
}

impl<O> fmt::Display for Session<O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() {
            let line = (0..self.grid.cols())
                .map(|col| {
                    let p = Coord::new(row, col);
                    if p == self.start {
                        'S'
                    } else if self.goals.contains(p) {
                        'G'
                    } else if self.grid.is_wall(p) {
                        '#'
                    } else if self.is_solution(p) {
                        '*'
                    } else if self.is_explored(p) {
                        'o'
                    } else {
                        '.'
                    }
                })
                .join("");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
