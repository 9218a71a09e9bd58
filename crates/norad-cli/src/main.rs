mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::route::{handle_route_command, DefaultSourceArg, RouteCommandArgs};
use commands::stars::handle_stars_command;
use norad_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Neptune's Pride hyperspace route planner")]
struct Cli {
    /// Snapshot file (or directory holding snapshot.json) to read.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest hyperspace path to a destination star.
    Route {
        /// Name of the destination star.
        #[arg(long)]
        destination: String,
        /// Name of the source star. Defaults to one of your production stars.
        #[arg(long)]
        source: Option<String>,
        /// Propulsion level to plan with instead of the snapshot's.
        #[arg(long, allow_negative_numbers = true)]
        tech_level: Option<i64>,
        /// How to pick the source star when --source is omitted.
        #[arg(long, value_enum, default_value_t = DefaultSourceArg::LowestId)]
        default_source: DefaultSourceArg,
    },
    /// List the stars you own.
    Stars,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            destination,
            source,
            tech_level,
            default_source,
        } => {
            let args = RouteCommandArgs {
                destination,
                source,
                tech_level,
                default_source,
            };
            handle_route_command(cli.snapshot.as_deref(), cli.format, &args)
        }
        Command::Stars => handle_stars_command(cli.snapshot.as_deref(), cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
