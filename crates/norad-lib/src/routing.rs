//! Route query orchestration.
//!
//! [`plan_route`] resolves star names against a [`Catalog`], builds the
//! distance graph, filters it to the player's propulsion range, runs the
//! shortest-path search from the destination and reconstructs the path to
//! the source.
//!
//! # Example
//!
//! ```ignore
//! use norad_lib::{load_snapshot, plan_route, RouteOutcome, RouteRequest};
//!
//! let catalog = load_snapshot("snapshot.json".as_ref())?;
//! match plan_route(&catalog, &RouteRequest::to("Altair").with_source("Vega"))? {
//!     RouteOutcome::Found(plan) => println!("{} hops", plan.hop_count()),
//!     RouteOutcome::Unreachable { .. } => println!("out of range"),
//! }
//! ```

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::catalog::{find_star_by_name, Catalog, Star, StarId};
use crate::error::{Error, Result};
use crate::graph::{build_distance_graph, Graph};
use crate::path::{reconstruct_path, shortest_paths};
use crate::reachability::filter_reachable;

/// Source of the complete distance graph used by [`plan_route_with`].
pub trait GraphBuilder {
    fn build(&self, catalog: &Catalog) -> Graph;
}

/// Builds the complete graph over every star in the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteGraphBuilder;

impl GraphBuilder for CompleteGraphBuilder {
    fn build(&self, catalog: &Catalog) -> Graph {
        build_distance_graph(catalog.stars())
    }
}

/// Policy for choosing a source when the request names none.
///
/// Candidates are the player's production stars (owned, industry > 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultSource {
    /// The candidate with the lowest identifier.
    #[default]
    LowestId,
    /// The candidate with the most industry; ties go to the lowest identifier.
    HighestIndustry,
}

impl DefaultSource {
    /// Pick a source star from `catalog`, if it has any candidates.
    pub fn select(self, catalog: &Catalog) -> Option<&Star> {
        let mut candidates = catalog.production_stars();
        match self {
            DefaultSource::LowestId => candidates.next(),
            DefaultSource::HighestIndustry => candidates.fold(None, |best: Option<&Star>, star| {
                match best {
                    Some(current) if current.industry >= star.industry => Some(current),
                    _ => Some(star),
                }
            }),
        }
    }
}

impl fmt::Display for DefaultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DefaultSource::LowestId => "lowest-id",
            DefaultSource::HighestIndustry => "highest-industry",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub destination: String,
    /// Explicit source star; falls back to [`RouteRequest::default_source`].
    pub source: Option<String>,
    /// Overrides the player's propulsion level from the snapshot.
    pub tech_level: Option<i64>,
    pub default_source: DefaultSource,
}

impl RouteRequest {
    /// Request a route to `destination` from the default source.
    pub fn to(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            source: None,
            tech_level: None,
            default_source: DefaultSource::default(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tech_level(mut self, level: i64) -> Self {
        self.tech_level = Some(level);
        self
    }

    pub fn with_default_source(mut self, policy: DefaultSource) -> Self {
        self.default_source = policy;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub destination: StarId,
    pub source: StarId,
    pub tech_level: i64,
    /// Stars from the destination to the source, both inclusive.
    pub steps: Vec<StarId>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of jumps in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Result of a route query whose stars were all found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RoutePlan),
    /// No chain of admissible jumps links the two stars.
    Unreachable {
        destination: StarId,
        source: StarId,
        tech_level: i64,
    },
}

impl RouteOutcome {
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            RouteOutcome::Found(plan) => Some(plan),
            RouteOutcome::Unreachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Compute a route using the complete distance graph.
pub fn plan_route(catalog: &Catalog, request: &RouteRequest) -> Result<RouteOutcome> {
    plan_route_with(catalog, request, &CompleteGraphBuilder)
}

/// Compute a route, obtaining the distance graph from `builder`.
///
/// Names are resolved before the builder is invoked, so unknown stars never
/// cost a graph build.
pub fn plan_route_with<B>(
    catalog: &Catalog,
    request: &RouteRequest,
    builder: &B,
) -> Result<RouteOutcome>
where
    B: GraphBuilder + ?Sized,
{
    let destination = find_star_by_name(catalog, &request.destination)?.id;
    let source = resolve_source(catalog, request)?;
    let tech_level = match request.tech_level {
        Some(level) => level,
        None => catalog.propulsion()?.level,
    };

    let distance_graph = builder.build(catalog);
    let reachable = filter_reachable(&distance_graph, tech_level);
    info!(
        total_edges = distance_graph.edge_count(),
        reachable_edges = reachable.edge_count(),
        tech_level,
        "prepared reachability graph"
    );

    let paths = shortest_paths(&reachable, destination);
    let Some(steps) = reconstruct_path(&paths, source, destination) else {
        return Ok(RouteOutcome::Unreachable {
            destination,
            source,
            tech_level,
        });
    };

    Ok(RouteOutcome::Found(RoutePlan {
        destination,
        source,
        tech_level,
        total_distance: paths.distance_to(source).unwrap_or_default(),
        steps,
    }))
}

fn resolve_source(catalog: &Catalog, request: &RouteRequest) -> Result<StarId> {
    if let Some(name) = request.source.as_deref() {
        return find_star_by_name(catalog, name).map(|star| star.id);
    }

    request
        .default_source
        .select(catalog)
        .map(|star| star.id)
        .ok_or(Error::NoDefaultSource {
            player: catalog.player_id(),
        })
}
