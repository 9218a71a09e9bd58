//! Propulsion range rules.
//!
//! Each propulsion level extends the safe jump range by one lightyear beyond
//! a free radius of [`FREE_JUMP_RADIUS`], and any jump at all requires
//! [`MIN_REQUIRED_LEVEL`].

use tracing::debug;

use crate::graph::{Edge, Graph};

/// Distance covered without any propulsion research beyond the minimum.
pub const FREE_JUMP_RADIUS: f64 = 3.0;

/// Lowest propulsion level that permits a jump.
pub const MIN_REQUIRED_LEVEL: i64 = 1;

/// Propulsion level needed to jump `lightyears`.
pub fn required_level(lightyears: f64) -> i64 {
    let level = (lightyears - FREE_JUMP_RADIUS).ceil();
    if level.is_nan() {
        return i64::MAX;
    }
    // `as` saturates, so very long jumps settle at i64::MAX.
    (level as i64).max(MIN_REQUIRED_LEVEL)
}

/// Whether a jump of `lightyears` is possible at `tech_level`.
///
/// Every jump needs at least [`MIN_REQUIRED_LEVEL`], so a level of 0 or below
/// admits nothing, zero-length jumps included. Level 1 admits every jump of
/// up to four lightyears.
pub fn is_reachable(lightyears: f64, tech_level: i64) -> bool {
    required_level(lightyears) <= tech_level
}

/// Copy of `graph` keeping only the edges admissible at `tech_level`.
///
/// The node set is preserved so stars left without edges still exist in the
/// result.
pub fn filter_reachable(graph: &Graph, tech_level: i64) -> Graph {
    let edges: Vec<Edge> = graph
        .edges()
        .iter()
        .filter(|edge| is_reachable(edge.distance, tech_level))
        .copied()
        .collect();

    let filtered = Graph::from_edges(graph.nodes().iter().copied(), edges);
    debug!(
        tech_level,
        total = graph.edge_count(),
        reachable = filtered.edge_count(),
        "filtered reachable edges"
    );
    filtered
}
