//! Map markers and the cost-based marker subsets.
//!
//! Only projects with both coordinates become markers. Each marker lands in
//! exactly one of the expensive/inexpensive subsets.

use crate::parser::schema::{MarkerCounts, ProjectRecord};
use crate::utils::config::EXPENSIVE_PROJECT_THRESHOLD;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A project placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Latitude (`y`)
    pub lat: f64,

    /// Longitude (`x`)
    pub lng: f64,

    pub title: String,
    pub objectives: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_cost: Option<f64>,
}

impl Marker {
    /// Build a marker from a record that has both coordinates
    ///
    /// **Public** - returns None for projects missing from the map
    pub fn from_record(record: &ProjectRecord) -> Option<Self> {
        let (x, y) = (record.x?, record.y?);
        Some(Self {
            lat: y,
            lng: x,
            title: record.title.clone(),
            objectives: record.objectives.clone(),
            description: record.description.clone(),
            yearly_cost: record.yearly_cost,
        })
    }

    /// Yearly cost above the expensive threshold
    pub fn is_expensive(&self) -> bool {
        self.yearly_cost
            .is_some_and(|cost| cost > EXPENSIVE_PROJECT_THRESHOLD)
    }
}

/// Which markers the cost filter shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerSubset {
    #[default]
    #[serde(rename = "all_projects", alias = "all")]
    All,

    #[serde(rename = "expensive_projects", alias = "expensive")]
    Expensive,

    #[serde(rename = "inexpensive_projects", alias = "inexpensive")]
    Inexpensive,
}

impl MarkerSubset {
    /// Value of the marker radio button; also the serde name
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSubset::All => "all_projects",
            MarkerSubset::Expensive => "expensive_projects",
            MarkerSubset::Inexpensive => "inexpensive_projects",
        }
    }
}

impl fmt::Display for MarkerSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerSubset {
    type Err = String;

    // Accepts the radio button values as well as the short names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "all_projects" => Ok(MarkerSubset::All),
            "expensive" | "expensive_projects" => Ok(MarkerSubset::Expensive),
            "inexpensive" | "inexpensive_projects" => Ok(MarkerSubset::Inexpensive),
            other => Err(format!("unknown marker subset '{}'", other)),
        }
    }
}

/// All markers plus the cost partition, stored as indices into `all`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    all: Vec<Marker>,
    expensive: Vec<usize>,
    inexpensive: Vec<usize>,
}

impl MarkerSet {
    /// Markers in the given subset
    pub fn subset(&self, subset: MarkerSubset) -> Vec<&Marker> {
        match subset {
            MarkerSubset::All => self.all.iter().collect(),
            MarkerSubset::Expensive => self.expensive.iter().map(|&i| &self.all[i]).collect(),
            MarkerSubset::Inexpensive => self.inexpensive.iter().map(|&i| &self.all[i]).collect(),
        }
    }

    pub fn all(&self) -> &[Marker] {
        &self.all
    }

    pub fn counts(&self) -> MarkerCounts {
        MarkerCounts {
            all: self.all.len(),
            expensive: self.expensive.len(),
            inexpensive: self.inexpensive.len(),
        }
    }
}

/// Build the marker set from project records
///
/// **Public** - main entry point for marker partitioning
pub fn build_markers(records: &[ProjectRecord]) -> MarkerSet {
    let mut set = MarkerSet::default();

    for marker in records.iter().filter_map(Marker::from_record) {
        let index = set.all.len();
        if marker.is_expensive() {
            set.expensive.push(index);
        } else {
            set.inexpensive.push(index);
        }
        set.all.push(marker);
    }

    debug!(
        "Built {} markers ({} expensive, {} inexpensive)",
        set.all.len(),
        set.expensive.len(),
        set.inexpensive.len()
    );

    set
}
