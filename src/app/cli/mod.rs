//! CLI Adapter.

mod reset;
mod rotate;
mod status;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::logging;
use crate::domain::{AppError, RotationMode};

#[derive(Parser)]
#[command(name = "swapnext")]
#[command(version)]
#[command(
    about = "Publish the next numbered render into the current slot",
    long_about = None
)]
struct Cli {
    /// Rotation root holding the cursor, assets and published slot (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Override the configured variant: directory or file
    #[arg(long, global = true)]
    mode: Option<RotationMode>,
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the cursor and publish the next asset
    #[clap(visible_alias = "r")]
    Rotate,
    /// Show the cursor and the asset the next rotation would publish
    #[clap(visible_alias = "st")]
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Overwrite the cursor without touching the published slot
    Reset {
        /// New cursor value; the next rotation publishes the asset after it
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        to: i64,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let root = match cli.root {
        Some(root) => Ok(root),
        None => std::env::current_dir().map_err(AppError::from),
    };

    let result: Result<(), AppError> = root.and_then(|root| match cli.command {
        Commands::Rotate => rotate::run_rotate(root, cli.mode),
        Commands::Status { json } => status::run_status(root, cli.mode, json),
        Commands::Reset { to } => reset::run_reset(root, cli.mode, to),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
