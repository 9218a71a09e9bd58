//! Route command handler for computing paths between stars.

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use norad_lib::{plan_route, DefaultSource, RouteRequest};

use crate::commands::load_catalog;
use norad_cli::output::{render_route, OutputFormat};

/// Default source selection as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DefaultSourceArg {
    /// Production star with the lowest identifier.
    #[default]
    LowestId,
    /// Production star with the most industry.
    HighestIndustry,
}

impl From<DefaultSourceArg> for DefaultSource {
    fn from(value: DefaultSourceArg) -> Self {
        match value {
            DefaultSourceArg::LowestId => DefaultSource::LowestId,
            DefaultSourceArg::HighestIndustry => DefaultSource::HighestIndustry,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Destination star name.
    pub destination: String,
    /// Source star name; defaults to a production star.
    pub source: Option<String>,
    /// Propulsion level override.
    pub tech_level: Option<i64>,
    /// Policy used when no source is given.
    pub default_source: DefaultSourceArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            destination: self.destination.clone(),
            source: self.source.clone(),
            tech_level: self.tech_level,
            default_source: self.default_source.into(),
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    snapshot: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let catalog = load_catalog(snapshot)?;
    info!(destination = %args.destination, source = ?args.source, "planning route");

    let outcome = plan_route(&catalog, &args.to_request())?;
    render_route(&mut io::stdout().lock(), &catalog, &outcome, format)
}
