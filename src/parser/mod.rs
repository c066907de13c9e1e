//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Parsing the project FeatureCollection
//! - Parsing the county boundary FeatureCollection
//! - Defining the report schema

pub mod boundaries;
pub mod dataset;
pub mod schema;

// Re-export main types
pub use boundaries::{load_boundaries, parse_boundaries};
pub use dataset::{load_projects, parse_projects};
pub use schema::{BoundaryFeature, CountyReport, MapReport, MarkerCounts, ProjectRecord};
