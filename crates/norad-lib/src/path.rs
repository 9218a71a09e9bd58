use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::Serialize;
use tracing::debug;

use crate::catalog::StarId;
use crate::graph::Graph;

/// Best known way to reach a star from the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathEntry {
    /// Total lightyears from the origin.
    pub distance: f64,
    /// Star immediately before this one on the optimal path.
    pub predecessor: StarId,
}

/// Single-source shortest-path tree rooted at a destination star.
///
/// Only stars other than the destination that are connected to it appear as
/// entries; absence means unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    destination: StarId,
    reached: BTreeMap<StarId, PathEntry>,
}

impl ShortestPaths {
    pub fn destination(&self) -> StarId {
        self.destination
    }

    /// Number of stars reached, excluding the destination.
    pub fn len(&self) -> usize {
        self.reached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }

    pub fn get(&self, star: StarId) -> Option<&PathEntry> {
        self.reached.get(&star)
    }

    /// Total distance from the destination; zero for the destination itself.
    pub fn distance_to(&self, star: StarId) -> Option<f64> {
        if star == self.destination {
            return Some(0.0);
        }
        self.reached.get(&star).map(|entry| entry.distance)
    }

    pub fn predecessor(&self, star: StarId) -> Option<StarId> {
        self.reached.get(&star).map(|entry| entry.predecessor)
    }

    /// Reached stars in ascending identifier order.
    pub fn reached(&self) -> impl Iterator<Item = (StarId, &PathEntry)> {
        self.reached.iter().map(|(id, entry)| (*id, entry))
    }
}

/// Run Dijkstra's algorithm outward from `destination`.
///
/// The frontier is ordered by tentative distance and then by star identifier,
/// so equal-cost choices always settle the lowest identifier first and
/// repeated runs produce identical trees. A neighbour's entry is replaced only
/// when a strictly shorter path is found.
pub fn shortest_paths(graph: &Graph, destination: StarId) -> ShortestPaths {
    let mut result = ShortestPaths {
        destination,
        reached: BTreeMap::new(),
    };
    let Some(origin) = graph.node_index(destination) else {
        return result;
    };

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[origin] = 0.0;
    queue.push(QueueEntry::new(origin, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;
        let current_distance = distances[entry.node];

        for neighbour in graph.adjacent(entry.node) {
            if visited[neighbour.node] {
                continue;
            }
            let next_cost = current_distance + neighbour.distance;
            if next_cost < distances[neighbour.node] {
                distances[neighbour.node] = next_cost;
                parents[neighbour.node] = Some(entry.node);
                queue.push(QueueEntry::new(neighbour.node, next_cost));
            }
        }
    }

    for (node, parent) in parents.into_iter().enumerate() {
        if let Some(parent) = parent {
            result.reached.insert(
                graph.node_id(node),
                PathEntry {
                    distance: distances[node],
                    predecessor: graph.node_id(parent),
                },
            );
        }
    }

    debug!(destination, reached = result.len(), "computed shortest paths");
    result
}

/// Walk the predecessor tree from `source` back to `destination`.
///
/// The returned path starts at `destination` and ends at `source`. `None`
/// means `source` is unreachable, or `paths` was computed for a different
/// destination.
pub fn reconstruct_path(
    paths: &ShortestPaths,
    source: StarId,
    destination: StarId,
) -> Option<Vec<StarId>> {
    if source == destination {
        return Some(vec![destination]);
    }
    if paths.destination != destination {
        return None;
    }

    let mut path = vec![source];
    let mut current = source;
    while current != destination {
        current = paths.predecessor(current)?;
        path.push(current);
        // A tree holds at most one entry per star plus the root.
        if path.len() > paths.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // node index (which follows star identifier order).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn queue_pops_cheapest_then_lowest_node() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(4, 2.0));
        queue.push(QueueEntry::new(3, 1.0));
        queue.push(QueueEntry::new(1, 2.0));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![3, 1, 4]);
    }

    #[test]
    fn missing_destination_yields_empty_tree() {
        let graph = Graph::from_edges([1, 2], vec![Edge::new(1, 2, 5.0)]);
        let paths = shortest_paths(&graph, 99);
        assert!(paths.is_empty());
        assert_eq!(reconstruct_path(&paths, 1, 99), None);
    }

    #[test]
    fn path_for_other_destination_is_rejected() {
        let graph = Graph::from_edges([1, 2], vec![Edge::new(1, 2, 5.0)]);
        let paths = shortest_paths(&graph, 1);
        assert_eq!(reconstruct_path(&paths, 2, 1), Some(vec![1, 2]));
        assert_eq!(reconstruct_path(&paths, 1, 2), None);
    }
}
