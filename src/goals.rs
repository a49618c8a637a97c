use smallvec::SmallVec;

use crate::coord::Coord;
use crate::MAX_GOALS;

/// Insertion-ordered set of at most [MAX_GOALS] goal cells. Inserting into a full set evicts
/// the oldest goal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalSet {
    goals: SmallVec<[Coord; MAX_GOALS]>,
}

impl GoalSet {
    pub fn new() -> GoalSet {
        GoalSet::default()
    }

    /// Adds a goal and returns the goal evicted to make room for it, if any.
    /// Inserting a goal that is already present changes nothing.
    pub fn insert(&mut self, goal: Coord) -> Option<Coord> {
        if self.contains(goal) {
            return None;
        }
        let evicted = if self.goals.len() == MAX_GOALS {
            Some(self.goals.remove(0))
        } else {
            None
        };
        self.goals.push(goal);
        evicted
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.goals.contains(&coord)
    }

    pub fn clear(&mut self) {
        self.goals.clear();
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.goals.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.goals
    }
}

impl FromIterator<Coord> for GoalSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = GoalSet::new();
        for goal in iter {
            set.insert(goal);
        }
        set
    }
}
