// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod route;
pub mod stars;

use std::path::Path;

use anyhow::{Context, Result};

use norad_lib::{load_snapshot, resolve_snapshot_path, Catalog};

/// Locate and decode the snapshot every subcommand works from.
pub fn load_catalog(target: Option<&Path>) -> Result<Catalog> {
    let path = resolve_snapshot_path(target).context("failed to locate a galaxy snapshot")?;
    load_snapshot(&path)
        .with_context(|| format!("failed to load snapshot from {}", path.display()))
}
