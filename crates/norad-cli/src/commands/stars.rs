//! Stars command handler listing the current player's stars.

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::commands::load_catalog;
use norad_cli::output::{render_stars, OutputFormat};

pub fn handle_stars_command(snapshot: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(snapshot)?;
    render_stars(&mut io::stdout().lock(), &catalog, format)
}
