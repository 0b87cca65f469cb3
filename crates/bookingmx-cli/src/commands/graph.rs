//! Graph dataset commands.
//!
//! All commands print JSON to stdout and log to stderr.
//!
//! # Examples
//!
//! ```bash
//! bookingmx validate --dataset data/jalisco.json
//! bookingmx neighbors --dataset data/jalisco.json Zapopan
//! bookingmx nearby --dataset data/jalisco.json Guadalajara --max-distance 20
//! ```

use std::path::PathBuf;

use bookingmx_graph::{load_graph, nearby_cities, validate_graph_data, Dataset, Graph};
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GraphSettings;
use crate::error::{CliError, CliExitCode, CliResult};

/// Dataset selection shared by all graph commands.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset JSON file (defaults to `graph.dataset_path` from config)
    #[arg(short, long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: DatasetArgs,
}

#[derive(Args, Debug, Clone)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub source: DatasetArgs,

    /// City whose direct neighbors are listed
    pub city: String,
}

#[derive(Args, Debug, Clone)]
pub struct NearbyArgs {
    #[command(flatten)]
    pub source: DatasetArgs,

    /// Origin city
    pub city: String,

    /// Maximum edge distance, inclusive (defaults to
    /// `graph.default_max_distance`, otherwise unbounded)
    #[arg(short, long, value_name = "DISTANCE", allow_negative_numbers = true)]
    pub max_distance: Option<f64>,
}

/// Print the validation report. Exit 4 when the dataset is invalid.
pub fn handle_validate(args: ValidateArgs, settings: &GraphSettings) -> CliResult<CliExitCode> {
    let dataset = read_dataset(&args.source, settings)?;
    let report = validate_graph_data(&dataset);

    print_json(&report)?;

    if report.is_ok() {
        info!(
            cities = dataset.cities.len(),
            edges = dataset.edges.len(),
            "dataset is valid"
        );
        Ok(CliExitCode::Success)
    } else {
        Ok(CliExitCode::InvalidInput)
    }
}

/// Print the city's direct neighbors in insertion order.
pub fn handle_neighbors(args: NeighborsArgs, settings: &GraphSettings) -> CliResult<CliExitCode> {
    let graph = read_graph(&args.source, settings)?;
    let neighbors = graph.neighbors(&args.city)?;

    print_json(&neighbors)?;
    Ok(CliExitCode::Success)
}

/// Print neighbors within the distance bound, nearest first.
pub fn handle_nearby(args: NearbyArgs, settings: &GraphSettings) -> CliResult<CliExitCode> {
    let graph = read_graph(&args.source, settings)?;
    let max_distance = args.max_distance.or(settings.default_max_distance);
    debug!(city = %args.city, ?max_distance, "running nearby query");

    let nearby = nearby_cities(&graph, &args.city, max_distance);

    print_json(&nearby)?;
    Ok(CliExitCode::Success)
}

fn dataset_path(args: &DatasetArgs, settings: &GraphSettings) -> CliResult<PathBuf> {
    args.dataset
        .clone()
        .or_else(|| settings.dataset_path.clone())
        .ok_or_else(|| {
            CliError::InvalidInput(
                "no dataset given: pass --dataset or set graph.dataset_path".to_string(),
            )
        })
}

fn read_dataset(args: &DatasetArgs, settings: &GraphSettings) -> CliResult<Dataset> {
    let path = dataset_path(args, settings)?;
    Ok(Dataset::from_path(&path)?)
}

fn read_graph(args: &DatasetArgs, settings: &GraphSettings) -> CliResult<Graph> {
    let dataset = read_dataset(args, settings)?;
    Ok(load_graph(&dataset)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
