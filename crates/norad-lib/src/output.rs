use std::fmt::Write;

use serde::Serialize;

use crate::catalog::{Catalog, StarId};
use crate::error::{Error, Result};
use crate::graph::distance;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    /// Bare star names, one per line, for pasting into in-game messages.
    Note,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: StarId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Star visited while following a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: StarId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lightyears from the previous step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub tech_level: i64,
    pub hops: usize,
    pub total_distance: f64,
    pub destination: RouteEndpoint,
    pub source: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved names and hop lengths.
    pub fn from_plan(catalog: &Catalog, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<StarId> = None;
        for (index, &star_id) in plan.steps.iter().enumerate() {
            let hop = previous.and_then(|prev| {
                let from = catalog.star(prev)?;
                let to = catalog.star(star_id)?;
                Some(distance(from, to))
            });
            steps.push(RouteStep {
                index,
                id: star_id,
                name: catalog.star_name(star_id).map(str::to_string),
                distance: hop,
            });
            previous = Some(star_id);
        }

        Ok(Self {
            tech_level: plan.tech_level,
            hops: plan.hop_count(),
            total_distance: plan.total_distance,
            destination: endpoint(catalog, plan.destination),
            source: endpoint(catalog, plan.source),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path to {} from {} ({} jumps at propulsion {}):",
            self.destination.display_name(),
            self.source.display_name(),
            self.hops,
            self.tech_level
        );
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}) +{:.2}ly",
                        step.index,
                        step.display_name(),
                        step.id,
                        distance
                    );
                }
                None => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({})",
                        step.index,
                        step.display_name(),
                        step.id
                    );
                }
            }
        }
        let _ = writeln!(buffer, "Total distance: {:.2}ly", self.total_distance);
        buffer
    }

    fn render_note(&self) -> String {
        let mut buffer = String::new();
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.display_name());
        }
        buffer
    }
}

fn endpoint(catalog: &Catalog, id: StarId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: catalog.star_name(id).map(str::to_string),
    }
}
