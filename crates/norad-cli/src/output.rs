//! Output formatting for route and star rendering.
//!
//! Renderers write to any [`Write`] sink so the command handlers can print to
//! stdout while tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde_json::json;

use norad_lib::{Catalog, RouteOutcome, RouteRenderMode, RouteSummary, StarId};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Star names only, one per line.
    Note,
    /// Machine readable JSON.
    Json,
}

/// Render the result of a route query.
pub fn render_route(
    out: &mut impl Write,
    catalog: &Catalog,
    outcome: &RouteOutcome,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match outcome {
        RouteOutcome::Found(plan) => {
            let summary = RouteSummary::from_plan(catalog, plan)?;
            match format {
                OutputFormat::Text => write!(out, "{}", summary.render(RouteRenderMode::PlainText))?,
                OutputFormat::Note => write!(out, "{}", summary.render(RouteRenderMode::Note))?,
                OutputFormat::Json => {
                    let value = json!({ "reachable": true, "route": summary });
                    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
                }
            }
        }
        RouteOutcome::Unreachable {
            destination,
            source,
            tech_level,
        } => match format {
            OutputFormat::Text | OutputFormat::Note => writeln!(
                out,
                "No route from {} to {} at propulsion level {}",
                display_name(catalog, *source),
                display_name(catalog, *destination),
                tech_level
            )?,
            OutputFormat::Json => {
                let value = json!({
                    "reachable": false,
                    "destination": endpoint_json(catalog, *destination),
                    "source": endpoint_json(catalog, *source),
                    "tech_level": tech_level,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            }
        },
    }
    Ok(())
}

/// Render the current player's stars.
pub fn render_stars(
    out: &mut impl Write,
    catalog: &Catalog,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let own: Vec<_> = catalog.own_stars().collect();
    match format {
        OutputFormat::Json => {
            let value = json!({
                "player": catalog.player_id(),
                "propulsion": catalog.propulsion().ok(),
                "total_stars": catalog.star_count(),
                "stars": own,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Note => {
            for star in &own {
                writeln!(out, "{}", star.name)?;
            }
        }
        OutputFormat::Text => {
            write_player_header(out, catalog)?;
            writeln!(
                out,
                "Found {} of your stars, {} total",
                own.len(),
                catalog.star_count()
            )?;
            for star in &own {
                let production = if star.industry > 0 {
                    format!("industry {}", star.industry)
                } else {
                    "no production".to_string()
                };
                let gate = if star.has_gate { ", gate" } else { "" };
                writeln!(out, "{:>5}: {} ({}{})", star.id, star.name, production, gate)?;
            }
        }
    }
    Ok(())
}

fn write_player_header(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    match catalog.current_player() {
        Some(player) => {
            let propulsion = catalog
                .propulsion()
                .map(|tech| format!("{} (value {})", tech.level, tech.value))
                .unwrap_or_else(|_| "unknown".to_string());
            writeln!(
                out,
                "You are player #{} ({}), propulsion level {}",
                player.id, player.name, propulsion
            )
        }
        None => writeln!(out, "You are player #{}", catalog.player_id()),
    }
}

fn display_name(catalog: &Catalog, id: StarId) -> &str {
    catalog.star_name(id).unwrap_or("<unknown>")
}

fn endpoint_json(catalog: &Catalog, id: StarId) -> serde_json::Value {
    json!({ "id": id, "name": catalog.star_name(id) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixture_catalog;
    use norad_lib::{plan_route, RouteRequest};

    fn render_to_string(catalog: &Catalog, outcome: &RouteOutcome, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render_route(&mut buffer, catalog, outcome, format).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn unreachable_text_names_both_ends() {
        let catalog = fixture_catalog();
        let outcome = plan_route(&catalog, &RouteRequest::to("Rigel")).unwrap();
        let text = render_to_string(&catalog, &outcome, OutputFormat::Text);
        assert_eq!(text, "No route from Sol to Rigel at propulsion level 3\n");
    }

    #[test]
    fn json_route_is_marked_reachable() {
        let catalog = fixture_catalog();
        let outcome = plan_route(&catalog, &RouteRequest::to("Deneb")).unwrap();
        let text = render_to_string(&catalog, &outcome, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["reachable"], true);
        assert_eq!(value["route"]["hops"], 3);
    }

    #[test]
    fn star_listing_marks_barren_worlds() {
        let catalog = fixture_catalog();
        let mut buffer = Vec::new();
        render_stars(&mut buffer, &catalog, OutputFormat::Text).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("You are player #1 (Ada), propulsion level 3 (value 0.875)\n"));
        assert!(text.contains("Found 3 of your stars, 6 total"));
        assert!(text.contains("    1: Sol (industry 5, gate)"));
        assert!(text.contains("    2: Vega (no production)"));
    }

    #[test]
    fn star_listing_json_carries_propulsion() {
        let catalog = fixture_catalog();
        let mut buffer = Vec::new();
        render_stars(&mut buffer, &catalog, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

        assert_eq!(value["propulsion"]["level"], 3);
        assert_eq!(value["propulsion"]["value"], 0.875);
    }

    #[test]
    fn missing_propulsion_is_shown_as_unknown() {
        let catalog = Catalog::new(
            1,
            Vec::new(),
            vec![norad_lib::Player {
                id: 1,
                name: "Ada".to_string(),
                tech: Default::default(),
            }],
        );
        let mut buffer = Vec::new();
        render_stars(&mut buffer, &catalog, OutputFormat::Text).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("You are player #1 (Ada), propulsion level unknown\n"));
    }
}
