//! Norad library entry points.
//!
//! This crate decodes a Neptune's Pride universe snapshot into a star
//! catalog, builds the distance graph between stars, filters it to the jumps a
//! player's propulsion research allows, and runs shortest-path searches over
//! the result. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod reachability;
pub mod routing;
pub mod snapshot;

pub use catalog::{
    find_star_by_name, Catalog, Player, PlayerId, Star, StarId, StarPosition, Technology,
    PROPULSION,
};
pub use dataset::{default_snapshot_path, resolve_snapshot_path};
pub use error::{Error, Result};
pub use graph::{build_distance_graph, distance, Edge, Graph, LIGHTYEARS_PER_UNIT};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{reconstruct_path, shortest_paths, PathEntry, ShortestPaths};
pub use reachability::{filter_reachable, is_reachable, required_level};
pub use routing::{
    plan_route, plan_route_with, CompleteGraphBuilder, DefaultSource, GraphBuilder, RouteOutcome,
    RoutePlan, RouteRequest,
};
pub use snapshot::load_snapshot;
