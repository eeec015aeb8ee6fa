/// This module implements a best-first search in the style of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
/// with an explicit settled set and a frontier that breaks ties by insertion order so that equal
/// inputs always produce equal paths.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Frontier entry. `index` points into the parents map, `sequence` counts pushes.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimate wins, then the earliest push.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, &(p, _))| p)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until a node accepted by `success` is popped from the frontier.
/// Returns the path (both endpoints included) and its cost, or [None] once the frontier is
/// exhausted.
///
/// `successors` yields neighbours with the cost of moving to them. With a consistent
/// `heuristic` and non-negative costs the returned path is optimal.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
        sequence,
    });
    // Node -> (parent index, best known cost). The start has no parent.
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut settled: FxHashSet<usize> = FxHashSet::default();

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        // A node may sit in the heap several times if cheaper routes to it were found later.
        // Only the first pop counts.
        if !settled.insert(index) {
            continue;
        }
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                debug!("Goal reached after settling {} nodes", settled.len());
                return Some((reverse_path(&parents, index), cost));
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost && !settled.contains(&e.index()) {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                sequence,
            });
        }
    }
    debug!("Frontier exhausted after settling {} nodes", settled.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Successors on a small directed graph given as (from, to, cost) edges.
    fn edges(graph: &[(u8, u8, u32)], node: u8) -> Vec<(u8, u32)> {
        graph
            .iter()
            .filter(|(from, _, _)| *from == node)
            .map(|&(_, to, c)| (to, c))
            .collect()
    }

    #[test]
    fn start_is_goal() {
        let result = astar(&7u8, |_| Vec::<(u8, u32)>::new(), |_| 0, |n| *n == 7);
        assert_eq!(result, Some((vec![7], 0)));
    }

    #[test]
    fn prefers_cheaper_detour() {
        let graph = [(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1)];
        let result = astar(&0u8, |n| edges(&graph, *n), |_| 0, |n| *n == 1);
        assert_eq!(result, Some((vec![0, 2, 3, 1], 3)));
    }

    #[test]
    fn unreachable_goal() {
        let graph = [(0, 1, 1), (1, 0, 1)];
        let result = astar(&0u8, |n| edges(&graph, *n), |_| 0, |n| *n == 2);
        assert_eq!(result, None);
    }

    /// Two equal-cost routes: the one discovered first is returned.
    #[test]
    fn ties_follow_insertion_order() {
        let graph = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
        let result = astar(&0u8, |n| edges(&graph, *n), |_| 0, |n| *n == 3);
        assert_eq!(result, Some((vec![0, 1, 3], 2)));
        let graph = [(0, 2, 1), (0, 1, 1), (1, 3, 1), (2, 3, 1)];
        let result = astar(&0u8, |n| edges(&graph, *n), |_| 0, |n| *n == 3);
        assert_eq!(result, Some((vec![0, 2, 3], 2)));
    }

    /// Each node is expanded at most once, even with cycles and duplicate frontier entries.
    #[test]
    fn nodes_settle_once() {
        let graph = [(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 0, 1), (1, 3, 1)];
        let mut expanded = Vec::new();
        let result = astar(
            &0u8,
            |n| {
                expanded.push(*n);
                edges(&graph, *n)
            },
            |_| 0,
            |n| *n == 3,
        );
        assert_eq!(result, Some((vec![0, 2, 1, 3], 3)));
        let mut sorted = expanded.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), expanded.len());
    }
}
