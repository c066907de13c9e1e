//! Threshold tables for choropleth coloring.
//!
//! A table is a list of (threshold, color) buckets in strictly descending
//! threshold order, a color for values at or below the lowest threshold,
//! and a "no data" color. Two tables ship built in; both can be replaced
//! from a TOML file.

use crate::utils::config::NO_DATA_COLOR;
use crate::utils::error::ThresholdError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Color for values at or below every threshold
pub const BASE_COLOR: &str = "#ffffe5";

/// Shades of orange from the top bucket down, shared by both built-in tables
const SHADES: [&str; 7] = [
    "#8c2d04", "#cc4c02", "#ec7014", "#fe9929", "#fec44f", "#fee391", "#fff7bc",
];

const COUNT_THRESHOLDS: [f64; 7] = [500.0, 200.0, 100.0, 50.0, 20.0, 10.0, 5.0];

const COST_THRESHOLDS: [f64; 7] = [1e12, 5e11, 1e11, 5e10, 1e10, 1e9, 1e8];

/// One cutoff and the color of values strictly above it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBucket {
    pub threshold: f64,
    pub color: String,
}

/// Ordered buckets plus the base and no-data colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    name: String,
    buckets: Vec<ColorBucket>,
    base_color: String,
    no_data_color: String,
}

impl ThresholdTable {
    /// Build a table, checking bucket order
    ///
    /// **Public** - the only way to construct a table
    ///
    /// # Errors
    /// * `ThresholdError::EmptyTable` - no buckets
    /// * `ThresholdError::NotDescending` - thresholds not strictly descending or not finite
    pub fn new(
        name: impl Into<String>,
        buckets: Vec<ColorBucket>,
        base_color: impl Into<String>,
        no_data_color: impl Into<String>,
    ) -> Result<Self, ThresholdError> {
        let name = name.into();

        if buckets.is_empty() {
            return Err(ThresholdError::EmptyTable(name));
        }

        let mut previous = f64::INFINITY;
        for bucket in &buckets {
            if !bucket.threshold.is_finite() || bucket.threshold >= previous {
                return Err(ThresholdError::NotDescending {
                    table: name,
                    value: bucket.threshold,
                });
            }
            previous = bucket.threshold;
        }

        Ok(Self {
            name,
            buckets,
            base_color: base_color.into(),
            no_data_color: no_data_color.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Buckets from the highest threshold down
    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    pub fn no_data_color(&self) -> &str {
        &self.no_data_color
    }

    /// Thresholds from the lowest up
    pub fn ascending_thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.buckets.iter().rev().map(|b| b.threshold)
    }
}

fn builtin(name: &str, thresholds: &[f64]) -> ThresholdTable {
    ThresholdTable {
        name: name.to_string(),
        buckets: thresholds
            .iter()
            .zip(SHADES)
            .map(|(&threshold, color)| ColorBucket {
                threshold,
                color: color.to_string(),
            })
            .collect(),
        base_color: BASE_COLOR.to_string(),
        no_data_color: NO_DATA_COLOR.to_string(),
    }
}

/// Built-in table for project counts (5, 10, 20, 50, 100, 200, 500)
pub fn count_table() -> &'static ThresholdTable {
    static TABLE: OnceLock<ThresholdTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("count", &COUNT_THRESHOLDS))
}

/// Built-in table for average costs (1e8 up to 1e12)
pub fn cost_table() -> &'static ThresholdTable {
    static TABLE: OnceLock<ThresholdTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("cost", &COST_THRESHOLDS))
}

/// The pair of tables used by the two choropleth layers
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethTables {
    pub count: ThresholdTable,
    pub cost: ThresholdTable,
}

impl Default for ChoroplethTables {
    fn default() -> Self {
        Self {
            count: count_table().clone(),
            cost: cost_table().clone(),
        }
    }
}

/// Threshold file layout; either table may be omitted
#[derive(Debug, Clone, Default, Deserialize)]
struct ThresholdFile {
    #[serde(default)]
    count: Option<TableSpec>,

    #[serde(default)]
    cost: Option<TableSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct TableSpec {
    buckets: Vec<ColorBucket>,

    #[serde(default = "default_base_color")]
    base_color: String,

    #[serde(default = "default_no_data_color")]
    no_data_color: String,
}

fn default_base_color() -> String {
    BASE_COLOR.to_string()
}

fn default_no_data_color() -> String {
    NO_DATA_COLOR.to_string()
}

/// Load threshold tables from a TOML file
///
/// **Public** - tables missing from the file fall back to the built-ins
///
/// # Example
/// ```toml
/// [count]
/// base_color = "#f7fbff"
/// buckets = [
///     { threshold = 50, color = "#08306b" },
///     { threshold = 10, color = "#4292c6" },
/// ]
/// ```
pub fn load_tables(path: impl AsRef<Path>) -> Result<ChoroplethTables, ThresholdError> {
    let path = path.as_ref();
    info!("Loading threshold tables: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_tables(&contents)
}

/// Parse threshold tables from TOML text
///
/// **Public** - used by `load_tables` and tests
pub fn parse_tables(contents: &str) -> Result<ChoroplethTables, ThresholdError> {
    let file: ThresholdFile = toml::from_str(contents)?;
    let mut tables = ChoroplethTables::default();

    if let Some(custom) = file.count {
        debug!("Using custom count table ({} buckets)", custom.buckets.len());
        tables.count = ThresholdTable::new("count", custom.buckets, custom.base_color, custom.no_data_color)?;
    }

    if let Some(custom) = file.cost {
        debug!("Using custom cost table ({} buckets)", custom.buckets.len());
        tables.cost = ThresholdTable::new("cost", custom.buckets, custom.base_color, custom.no_data_color)?;
    }

    Ok(tables)
}
