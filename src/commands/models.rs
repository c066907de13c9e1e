use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Project dataset (FeatureCollection)
    pub data: PathBuf,

    /// County boundary dataset (optional)
    pub boundaries: Option<PathBuf>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the styled boundary GeoJSON (needs boundaries)
    pub output_geojson: Option<PathBuf>,

    /// Directory for legend HTML fragments (optional)
    pub legend_dir: Option<PathBuf>,

    /// TOML file overriding the threshold tables (optional)
    pub thresholds: Option<PathBuf>,

    /// Print county table to stdout
    pub print_summary: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data.json"),
            boundaries: None,
            output_json: PathBuf::from("report.json"),
            output_geojson: None,
            legend_dir: None,
            thresholds: None,
            print_summary: false,
        }
    }
}
