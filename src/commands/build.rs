//! Build command implementation.
//!
//! The build command:
//! 1. Loads the project dataset
//! 2. Loads the county boundaries (if given)
//! 3. Loads threshold tables
//! 4. Aggregates counties and partitions markers
//! 5. Writes output files

use super::models::BuildArgs;
use super::summary::print_county_table;
use crate::classify::{load_tables, ChoroplethTables};
use crate::output::{write_json, write_legend, write_report};
use crate::parser::schema::MapReport;
use crate::parser::{load_boundaries, load_projects};
use crate::style::{style_boundaries, ChoroplethLayer};
use crate::view::MapState;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Unreadable or malformed datasets
/// * Invalid threshold file
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = BuildArgs {
///     data: PathBuf::from("data.json"),
///     boundaries: Some(PathBuf::from("kenya_counties.geojson")),
///     output_geojson: Some(PathBuf::from("counties.styled.geojson")),
///     ..Default::default()
/// };
///
/// execute_build(args)?;
/// ```
pub fn execute_build(args: BuildArgs) -> Result<MapReport> {
    let start_time = Instant::now();

    info!("Building map data from: {}", args.data.display());

    // Step 1: Load projects
    info!("Step 1/5: Loading project dataset...");
    let records = load_projects(&args.data)
        .with_context(|| format!("Failed to load project dataset {}", args.data.display()))?;

    // Step 2: Load boundaries
    let boundaries = match &args.boundaries {
        Some(path) => {
            info!("Step 2/5: Loading county boundaries...");
            load_boundaries(path)
                .with_context(|| format!("Failed to load boundaries {}", path.display()))?
        }
        None => {
            info!("Step 2/5: Skipping boundaries (not provided)");
            Vec::new()
        }
    };

    // Step 3: Threshold tables
    info!("Step 3/5: Loading threshold tables...");
    let tables = match &args.thresholds {
        Some(path) => load_tables(path)
            .with_context(|| format!("Failed to load thresholds {}", path.display()))?,
        None => ChoroplethTables::default(),
    };

    // Step 4: Aggregate
    info!("Step 4/5: Aggregating counties...");
    let state = MapState::build(&records, boundaries, tables);
    let report = state.report(&args.data.display().to_string());

    info!("Totals: {}", report.totals.summary());
    debug!(
        "Markers: {} ({} expensive, {} inexpensive)",
        report.markers.all, report.markers.expensive, report.markers.inexpensive
    );

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let Some(geojson_path) = &args.output_geojson {
        let styled = style_boundaries(state.boundaries(), state.summaries(), state.tables());
        write_json(&styled, geojson_path).context("Failed to write styled GeoJSON")?;
        info!("✓ Styled boundaries written to: {}", geojson_path.display());
    }

    if let Some(dir) = &args.legend_dir {
        for layer in [ChoroplethLayer::ProjectCount, ChoroplethLayer::AverageCost] {
            let path = write_legend(layer, state.legend(layer), dir)
                .with_context(|| format!("Failed to write {} legend", layer))?;
            info!("✓ Legend written to: {}", path.display());
        }
    }

    if args.print_summary {
        print_county_table(&report, state.tables());
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.data.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    if !args.data.is_file() {
        anyhow::bail!("Dataset not found: {}", args.data.display());
    }

    if let Some(boundaries) = &args.boundaries {
        if !boundaries.is_file() {
            anyhow::bail!("Boundary dataset not found: {}", boundaries.display());
        }
    }

    if args.output_geojson.is_some() && args.boundaries.is_none() {
        anyhow::bail!("--geojson requires --boundaries");
    }

    if args.output_geojson.as_ref() == Some(&args.output_json) {
        anyhow::bail!("Report and GeoJSON outputs must be different files");
    }

    Ok(())
}
