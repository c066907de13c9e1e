use super::summary::print_legend;
use crate::classify::{load_tables, ChoroplethTables};
use crate::legend::{build_legend, legend_html};
use crate::output::read_report;
use crate::style::ChoroplethLayer;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    let projects: u64 = report.counties.values().map(|c| c.summary.project_count).sum();
    if projects != report.totals.projects {
        anyhow::bail!(
            "County project counts sum to {} but totals report {}",
            projects,
            report.totals.projects
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Counties: {}", report.counties.len());
    println!("  Projects: {}", report.totals.projects);
    println!("  Markers: {}", report.markers.all);

    Ok(())
}

/// Print the legend of a layer, as swatches or as HTML
pub fn show_legend(layer: ChoroplethLayer, thresholds: Option<&Path>, html: bool) -> Result<()> {
    let tables = match thresholds {
        Some(path) => load_tables(path)
            .with_context(|| format!("Failed to load thresholds {}", path.display()))?,
        None => ChoroplethTables::default(),
    };

    let entries = build_legend(layer.table(&tables));

    if html {
        println!("{}", legend_html(layer.title(), &entries));
    } else {
        print_legend(layer.title(), &entries);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("County Project Map Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  source: string               - Dataset the report was built from");
        println!("  totals: object               - Totals across counties");
        println!("    counties: number           - Counties with at least one project");
        println!("    projects: number           - Projects with a county");
        println!("    missing_from_map: number   - Projects without coordinates");
        println!("    cost_missing: number       - Projects without yearly cost");
        println!("    total_cost: number         - Sum of yearly costs");
        println!("  markers: object              - Marker subset sizes (all/expensive/inexpensive)");
        println!("  counties: object             - Keyed by uppercased county name");
        println!("    project_count: number");
        println!("    missing_from_map_count: number");
        println!("    total_cost: number");
        println!("    cost_missing_count: number");
        println!("    average_cost: number       - 0 when no project reported a cost");
        println!("    count_color: string        - Fill on the project count layer");
        println!("    cost_color: string         - Fill on the average cost layer");
        println!("  generated_at: string         - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("County Project Map v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-county project statistics, choropleth styles and legends.");
}
