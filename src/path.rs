use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::coord::Coord;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps every discovered cell to the index of its predecessor in the same map and its best
/// known cost from the start. The start has predecessor index [usize::MAX].
pub type PredecessorMap = FxIndexMap<Coord, (usize, u32)>;

/// Walks predecessor links back from `terminal` and returns the cells from the start to
/// `terminal`, both inclusive. Empty if `terminal` was never discovered.
pub fn reconstruct(parents: &PredecessorMap, terminal: Coord) -> Vec<Coord> {
    match parents.get_index_of(&terminal) {
        Some(index) => reverse_path(parents, |&(p, _)| p, index),
        None => Vec::new(),
    }
}

fn reverse_path<V, F>(parents: &FxIndexMap<Coord, V>, mut parent: F, start: usize) -> Vec<Coord>
where
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<Coord> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            *node
        })
    })
    .collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_start() {
        let mut parents = PredecessorMap::default();
        parents.insert(Coord::new(2, 2), (usize::MAX, 0));
        parents.insert(Coord::new(1, 2), (0, 1));
        parents.insert(Coord::new(2, 1), (0, 1));
        parents.insert(Coord::new(1, 1), (2, 2));
        assert_eq!(
            reconstruct(&parents, Coord::new(1, 1)),
            vec![Coord::new(2, 2), Coord::new(2, 1), Coord::new(1, 1)]
        );
        assert_eq!(reconstruct(&parents, Coord::new(2, 2)), vec![Coord::new(2, 2)]);
        assert!(reconstruct(&parents, Coord::new(0, 0)).is_empty());
    }
}
