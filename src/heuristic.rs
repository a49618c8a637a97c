use core::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::SearchError;

/// Distance estimators between two cells. Both are admissible for unit-cost 4-directional
/// movement; [Manhattan](Heuristic::Manhattan) is also exact on an empty grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn distance(&self, a: &Coord, b: &Coord) -> f64 {
        match self {
            Heuristic::Manhattan => a.manhattan_distance(b) as f64,
            Heuristic::Euclidean => a.euclidean_distance(b),
        }
    }

    /// Distance to the closest of `goals`, 0 if there are none.
    pub fn nearest(&self, point: &Coord, goals: &[Coord]) -> f64 {
        goals
            .iter()
            .map(|goal| self.distance(point, goal))
            .min_by(f64::total_cmp)
            .unwrap_or(0.0)
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(SearchError::UnknownHeuristic(s.to_owned())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        })
    }
}
