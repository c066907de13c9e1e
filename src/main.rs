//! County Project Map CLI
//!
//! Turns the project dataset and county boundaries into the report,
//! styled GeoJSON and legends the map page loads.

use anyhow::Result;
use clap::{Parser, Subcommand};
use county_project_map::commands::{
    display_schema, display_version, execute_build, show_legend, validate_args,
    validate_report_file, BuildArgs,
};
use county_project_map::style::ChoroplethLayer;
use county_project_map::utils::config::{BOUNDARIES_ENV_VAR, DATA_ENV_VAR};
use env_logger::Env;
use std::path::PathBuf;

/// County Project Map - choropleth data for development projects
#[derive(Parser, Debug)]
#[command(name = "project-map")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the dataset and write map assets
    Build {
        /// Project dataset (GeoJSON FeatureCollection)
        #[arg(short, long, env = DATA_ENV_VAR)]
        data: PathBuf,

        /// County boundaries (GeoJSON FeatureCollection with COUNTY property)
        #[arg(short, long, env = BOUNDARIES_ENV_VAR)]
        boundaries: Option<PathBuf>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Output path for styled boundary GeoJSON (requires --boundaries)
        #[arg(short, long)]
        geojson: Option<PathBuf>,

        /// Directory to write legend HTML fragments into
        #[arg(long)]
        legend_html: Option<PathBuf>,

        /// TOML file overriding the threshold tables
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Print county table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the legend of a layer
    Legend {
        /// Layer: count or cost
        #[arg(short, long, default_value = "count")]
        layer: ChoroplethLayer,

        /// TOML file overriding the threshold tables
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Print HTML instead of swatches
        #[arg(long)]
        html: bool,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Build {
            data,
            boundaries,
            output,
            geojson,
            legend_html,
            thresholds,
            summary,
        } => {
            let args = BuildArgs {
                data,
                boundaries,
                output_json: output,
                output_geojson: geojson,
                legend_dir: legend_html,
                thresholds,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Legend {
            layer,
            thresholds,
            html,
        } => {
            show_legend(layer, thresholds.as_deref(), html)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
