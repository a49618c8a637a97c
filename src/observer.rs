use crate::coord::Coord;

/// Receives the events of a search, typically to render or count them. All methods default to
/// doing nothing.
pub trait SearchObserver {
    /// Emitted once per expansion. `step` is the 0-based index of the expansion.
    fn on_explored(&mut self, _coord: Coord, _step: usize) {}

    /// Emitted once on success with the cells from start to goal and the path's edge count.
    fn on_path_found(&mut self, _path: &[Coord], _steps: usize) {}

    /// Emitted once when the frontier runs empty without reaching a goal.
    fn on_exhausted(&mut self) {}

    /// Emitted when a running search is aborted.
    fn on_cancelled(&mut self) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_explored(&mut self, coord: Coord, step: usize) {
        (**self).on_explored(coord, step)
    }
    fn on_path_found(&mut self, path: &[Coord], steps: usize) {
        (**self).on_path_found(path, steps)
    }
    fn on_exhausted(&mut self) {
        (**self).on_exhausted()
    }
    fn on_cancelled(&mut self) {
        (**self).on_cancelled()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    Explored { coord: Coord, step: usize },
    PathFound { path: Vec<Coord>, steps: usize },
    Exhausted,
    Cancelled,
}

/// Observer that records every event in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    pub events: Vec<SearchEvent>,
}

impl EventLog {
    /// Coordinates of all explored events, in emission order.
    pub fn explored_order(&self) -> Vec<Coord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Explored { coord, .. } => Some(*coord),
                _ => None,
            })
            .collect()
    }

    /// The most recently reported path, if any.
    pub fn last_path(&self) -> Option<&[Coord]> {
        self.events.iter().rev().find_map(|e| match e {
            SearchEvent::PathFound { path, .. } => Some(path.as_slice()),
            _ => None,
        })
    }

    pub fn path_found_count(&self) -> usize {
        self.count(|e| matches!(e, SearchEvent::PathFound { .. }))
    }

    pub fn exhausted_count(&self) -> usize {
        self.count(|e| matches!(e, SearchEvent::Exhausted))
    }

    pub fn cancelled_count(&self) -> usize {
        self.count(|e| matches!(e, SearchEvent::Cancelled))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn count<F: Fn(&SearchEvent) -> bool>(&self, pred: F) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl SearchObserver for EventLog {
    fn on_explored(&mut self, coord: Coord, step: usize) {
        self.events.push(SearchEvent::Explored { coord, step });
    }
    fn on_path_found(&mut self, path: &[Coord], steps: usize) {
        self.events.push(SearchEvent::PathFound {
            path: path.to_vec(),
            steps,
        });
    }
    fn on_exhausted(&mut self) {
        self.events.push(SearchEvent::Exhausted);
    }
    fn on_cancelled(&mut self) {
        self.events.push(SearchEvent::Cancelled);
    }
}
