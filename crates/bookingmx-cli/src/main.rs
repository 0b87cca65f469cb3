//! BookingMX CLI
//!
//! Validate city distance datasets and query them for neighboring cities.
//!
//! # Commands
//!
//! - `validate`: structural checks, prints `{"ok": ...}`
//! - `neighbors`: direct neighbors of a city in insertion order
//! - `nearby`: direct neighbors within a distance bound, nearest first
//!
//! Exit codes are listed in `error.rs`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod error;

use crate::config::{Config, LoggingConfig};
use crate::error::{CliExitCode, CliResult};

/// BookingMX city graph tools
#[derive(Parser)]
#[command(name = "bookingmx")]
#[command(version)]
#[command(about = "Validate and query city distance datasets")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML); replaces config/ and environment lookup
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a dataset for duplicate or invalid cities, dangling edges and
    /// invalid distances
    Validate(commands::graph::ValidateArgs),
    /// List the direct neighbors of a city
    Neighbors(commands::graph::NeighborsArgs),
    /// List neighbors of a city within a distance, nearest first
    Nearby(commands::graph::NearbyArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(err.exit_code().into());
        }
    };

    init_logging(cli.verbose, &config.logging);

    let settings = &config.graph;
    let result = match cli.command {
        Commands::Validate(args) => commands::graph::handle_validate(args, settings),
        Commands::Neighbors(args) => commands::graph::handle_neighbors(args, settings),
        Commands::Nearby(args) => commands::graph::handle_nearby(args, settings),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {}", err);
            err.exit_code()
        }
    };

    std::process::exit(exit_code.into());
}

fn load_config(path: Option<&std::path::Path>) -> CliResult<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location)
        .with_writer(std::io::stderr);

    if logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}
