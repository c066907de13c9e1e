//! Input records and the JSON report schema.
//!
//! `ProjectRecord` and `BoundaryFeature` are what the loaders produce.
//! `MapReport` is the structure of the JSON file we write to disk;
//! it is versioned to allow future evolution.

use crate::aggregator::{AggregateTotals, CountySummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One project entry from the static dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectRecord {
    /// County as written in the dataset (not normalized)
    pub county: Option<String>,

    /// Longitude
    pub x: Option<f64>,

    /// Latitude
    pub y: Option<f64>,

    pub title: String,
    pub description: String,
    pub objectives: String,

    /// Yearly cost in KES, when reported
    pub yearly_cost: Option<f64>,
}

impl ProjectRecord {
    /// Both coordinates are present
    pub fn is_mapped(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// One county polygon from the boundary dataset
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Raw `COUNTY` property, when it is a string
    pub county: Option<String>,

    /// All feature properties, untouched
    pub properties: serde_json::Map<String, serde_json::Value>,

    /// Geometry, passed through to the presentation layer as-is
    pub geometry: serde_json::Value,
}

impl BoundaryFeature {
    /// Lookup key into the county summaries
    pub fn county_key(&self) -> Option<String> {
        self.county.as_deref().map(str::to_uppercase)
    }
}

/// Top-level report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the report was built from
    pub source: String,

    /// Totals across all counties
    pub totals: AggregateTotals,

    /// Marker subset sizes
    pub markers: MarkerCounts,

    /// Per-county statistics keyed by uppercased county name
    pub counties: BTreeMap<String, CountyReport>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// A county's summary together with its choropleth colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyReport {
    #[serde(flatten)]
    pub summary: CountySummary,

    /// Fill color on the project count layer
    pub count_color: String,

    /// Fill color on the average cost layer
    pub cost_color: String,
}

/// Number of markers in each subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCounts {
    pub all: usize,
    pub expensive: usize,
    pub inexpensive: usize,
}
