//! County boundary parser.
//!
//! The boundary dataset is a polygon FeatureCollection keyed by a `COUNTY`
//! property. Geometry is not interpreted, only carried through.

use super::dataset::{feature_array, read_feature_collection};
use super::schema::BoundaryFeature;
use crate::utils::config::BOUNDARY_COUNTY_FIELD;
use crate::utils::error::ParseError;
use log::{info, warn};
use serde_json::Value;
use std::path::Path;

/// Load and parse a boundary dataset from disk
///
/// **Public** - main entry point for boundary loading
pub fn load_boundaries(path: impl AsRef<Path>) -> Result<Vec<BoundaryFeature>, ParseError> {
    let path = path.as_ref();
    info!("Loading county boundaries: {}", path.display());

    let raw = read_feature_collection(path)?;
    let boundaries = parse_boundaries(&raw)?;

    info!("Loaded {} county boundaries", boundaries.len());
    Ok(boundaries)
}

/// Parse an already decoded boundary FeatureCollection
///
/// **Public** - used by `load_boundaries` and tests
pub fn parse_boundaries(raw: &Value) -> Result<Vec<BoundaryFeature>, ParseError> {
    let features = feature_array(raw)?;

    let boundaries: Vec<BoundaryFeature> = features
        .iter()
        .enumerate()
        .filter_map(|(i, feature)| {
            let feature = feature.as_object();
            if feature.is_none() {
                warn!("Skipping boundary {}: not a JSON object", i);
            }
            feature
        })
        .map(|feature| {
            let properties = feature
                .get("properties")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();

            // Some exports carry numeric ids in COUNTY; those never match a summary
            let county = properties
                .get(BOUNDARY_COUNTY_FIELD)
                .and_then(Value::as_str)
                .map(str::to_string);

            BoundaryFeature {
                county,
                properties,
                geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
            }
        })
        .collect();

    let unnamed = boundaries.iter().filter(|b| b.county.is_none()).count();
    if unnamed > 0 {
        warn!("{} boundaries have no string COUNTY property", unnamed);
    }

    Ok(boundaries)
}
