//! Project dataset parser.
//!
//! Reads the project FeatureCollection into `ProjectRecord`s. Coordinates
//! live in the `x`/`y` properties rather than in the geometry. Decoding is
//! lenient: a value with the wrong type is treated as absent, never as an
//! error. Only a structurally broken file is rejected.

use super::schema::ProjectRecord;
use crate::utils::config::COST_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde_json::{Deserializer, Map, Value};
use std::path::Path;

type Properties = Map<String, Value>;

/// Load and parse a project dataset from disk
///
/// **Public** - main entry point for dataset loading
///
/// Accepts plain JSON as well as the `var data = {...};` wrapper the
/// dataset is shipped in for the browser.
///
/// # Errors
/// * `ParseError::ReadFailed` - file cannot be read
/// * `ParseError::JsonError` - content is not JSON
/// * `ParseError::InvalidFormat` - JSON is not a FeatureCollection
pub fn load_projects(path: impl AsRef<Path>) -> Result<Vec<ProjectRecord>, ParseError> {
    let path = path.as_ref();
    info!("Loading project dataset: {}", path.display());

    let raw = read_feature_collection(path)?;
    let records = parse_projects(&raw)?;

    info!("Loaded {} project records", records.len());
    Ok(records)
}

/// Parse an already decoded project FeatureCollection
///
/// **Public** - used by `load_projects` and tests
pub fn parse_projects(raw: &Value) -> Result<Vec<ProjectRecord>, ParseError> {
    let features = feature_array(raw)?;
    let mut records = Vec::with_capacity(features.len());

    for (i, feature) in features.iter().enumerate() {
        let Some(feature) = feature.as_object() else {
            warn!("Skipping feature {}: not a JSON object", i);
            continue;
        };

        let empty = Properties::new();
        let props = feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        records.push(record_from_properties(props));
    }

    debug!("Parsed {} of {} features", records.len(), features.len());
    Ok(records)
}

/// Read a file and decode it as a FeatureCollection value
///
/// **Public (crate)** - shared with the boundary loader
pub(crate) fn read_feature_collection(path: &Path) -> Result<Value, ParseError> {
    let content = std::fs::read_to_string(path)?;
    decode_dataset(&content)
}

/// Return the `features` array of a FeatureCollection
///
/// **Public (crate)** - shared with the boundary loader
pub(crate) fn feature_array(raw: &Value) -> Result<&Vec<Value>, ParseError> {
    let obj = raw.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("Dataset must be a JSON object".to_string())
    })?;

    if let Some(kind) = obj.get("type").and_then(Value::as_str) {
        if kind != "FeatureCollection" {
            return Err(ParseError::InvalidFormat(format!(
                "Expected a FeatureCollection, found '{}'",
                kind
            )));
        }
    }

    obj.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::InvalidFormat("Missing 'features' array".to_string()))
}

/// Decode plain JSON or a `var name = {...};` script wrapper
///
/// **Private** - internal helper for read_feature_collection
///
/// Inside a wrapper only the first JSON object is decoded, so a trailing
/// `;` or comment after it is ignored.
fn decode_dataset(content: &str) -> Result<Value, ParseError> {
    let trimmed = content.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let Some(start) = trimmed.find('{') else {
        return Ok(serde_json::from_str(trimmed)?);
    };

    debug!("Stripping script wrapper around dataset JSON");
    let body = &trimmed[start..];
    let mut stream = Deserializer::from_str(body).into_iter::<Value>();
    let value = match stream.next() {
        Some(value) => value?,
        None => {
            return Err(ParseError::InvalidFormat(
                "Script wrapper holds no JSON object".to_string(),
            ))
        }
    };

    let rest = body[stream.byte_offset()..].trim();
    if !rest.is_empty() && rest != ";" {
        debug!("Ignoring {} bytes after dataset JSON", rest.len());
    }

    Ok(value)
}

/// Build a record from a feature's properties
///
/// **Private** - internal helper for parse_projects
fn record_from_properties(props: &Properties) -> ProjectRecord {
    ProjectRecord {
        county: string_field(props, "county"),
        x: number_field(props, "x"),
        y: number_field(props, "y"),
        title: text_field(props, "project_title"),
        description: text_field(props, "project_description"),
        objectives: text_field(props, "project_objectives"),
        yearly_cost: COST_FIELD_NAMES
            .iter()
            .find_map(|name| number_field(props, name)),
    }
}

/// A property that must be a non-blank string
fn string_field(props: &Properties, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A finite number, or a string holding one
fn number_field(props: &Properties, key: &str) -> Option<f64> {
    let value = match props.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// Free text; absent becomes empty
fn text_field(props: &Properties, key: &str) -> String {
    match props.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
