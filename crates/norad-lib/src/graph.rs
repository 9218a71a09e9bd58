use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{Star, StarId};

/// Lightyears per raw map coordinate unit.
pub const LIGHTYEARS_PER_UNIT: f64 = 8.0;

/// Distance between two stars in lightyears.
pub fn distance(a: &Star, b: &Star) -> f64 {
    a.position.distance_to(&b.position) * LIGHTYEARS_PER_UNIT
}

/// Undirected weighted edge between two stars.
///
/// `a` always holds the lower identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: StarId,
    pub b: StarId,
    pub distance: f64,
}

impl Edge {
    /// Create an edge, ordering the endpoints.
    pub fn new(first: StarId, second: StarId, distance: f64) -> Self {
        let (a, b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self { a, b, distance }
    }

    /// The endpoint opposite `star`, if `star` is an endpoint at all.
    pub fn other(&self, star: StarId) -> Option<StarId> {
        if star == self.a {
            Some(self.b)
        } else if star == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Adjacency entry pointing at a node index within the owning [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Neighbour {
    pub(crate) node: usize,
    pub(crate) distance: f64,
}

/// Undirected weighted star graph.
///
/// Nodes are held in ascending identifier order and addressed by dense index,
/// so node order and identifier order agree. The edge list is kept alongside
/// the adjacency lists for inspection.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<StarId>,
    index: HashMap<StarId, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbour>>,
}

impl Graph {
    /// Build a graph over `nodes` holding `edges`.
    ///
    /// Edges referencing an identifier outside `nodes` are ignored, as are
    /// self edges.
    pub fn from_edges(nodes: impl IntoIterator<Item = StarId>, edges: Vec<Edge>) -> Self {
        let mut nodes: Vec<StarId> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();

        let index: HashMap<StarId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, position))
            .collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut kept = Vec::with_capacity(edges.len());
        for edge in edges {
            let (Some(&a), Some(&b)) = (index.get(&edge.a), index.get(&edge.b)) else {
                continue;
            };
            if a == b {
                continue;
            }
            adjacency[a].push(Neighbour {
                node: b,
                distance: edge.distance,
            });
            adjacency[b].push(Neighbour {
                node: a,
                distance: edge.distance,
            });
            kept.push(edge);
        }

        Self {
            nodes,
            index,
            edges: kept,
            adjacency,
        }
    }

    /// Star identifiers in ascending order.
    pub fn nodes(&self) -> &[StarId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, star: StarId) -> bool {
        self.index.contains_key(&star)
    }

    /// Neighbouring stars of `star` with the connecting edge weight.
    pub fn neighbours(&self, star: StarId) -> impl Iterator<Item = (StarId, f64)> + '_ {
        self.index
            .get(&star)
            .map(|&node| self.adjacency[node].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |neighbour| (self.nodes[neighbour.node], neighbour.distance))
    }

    /// The edge joining `a` and `b`, if present.
    pub fn edge_between(&self, a: StarId, b: StarId) -> Option<f64> {
        self.neighbours(a)
            .find(|(target, _)| *target == b)
            .map(|(_, distance)| distance)
    }

    pub(crate) fn node_index(&self, star: StarId) -> Option<usize> {
        self.index.get(&star).copied()
    }

    pub(crate) fn node_id(&self, node: usize) -> StarId {
        self.nodes[node]
    }

    pub(crate) fn adjacent(&self, node: usize) -> &[Neighbour] {
        &self.adjacency[node]
    }
}

/// Build the complete distance graph over `stars`.
///
/// Every unordered pair of distinct stars produces exactly one edge weighted
/// by [`distance`]. Pairs are visited in ascending identifier order.
pub fn build_distance_graph<'a>(stars: impl IntoIterator<Item = &'a Star>) -> Graph {
    let mut stars: Vec<&Star> = stars.into_iter().collect();
    stars.sort_by_key(|star| star.id);
    stars.dedup_by_key(|star| star.id);

    let pair_count = stars.len() * stars.len().saturating_sub(1) / 2;
    let mut edges = Vec::with_capacity(pair_count);
    for (i, first) in stars.iter().enumerate() {
        for second in &stars[i + 1..] {
            edges.push(Edge::new(first.id, second.id, distance(first, second)));
        }
    }

    let graph = Graph::from_edges(stars.iter().map(|star| star.id), edges);
    debug!(
        stars = graph.node_count(),
        edges = graph.edge_count(),
        "built distance graph"
    );
    graph
}
