//! Per-county styles for the choropleth layers.
//!
//! A boundary is matched to its summary by uppercased `COUNTY` name.
//! Boundaries without a usable name, or with no projects, are "no data".

use super::layer::ChoroplethLayer;
use crate::aggregator::{CountySummaries, CountySummary};
use crate::classify::{classify, ChoroplethTables};
use crate::parser::schema::BoundaryFeature;
use crate::utils::config::{
    BOUNDARY_COLOR, BOUNDARY_FILL_OPACITY, BOUNDARY_OPACITY, BOUNDARY_WEIGHT,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Style record handed to the map library for one county polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub weight: u32,
    pub opacity: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub fill_color: String,
}

impl FeatureStyle {
    fn with_fill(fill_color: &str) -> Self {
        Self {
            weight: BOUNDARY_WEIGHT,
            opacity: BOUNDARY_OPACITY,
            color: BOUNDARY_COLOR.to_string(),
            fill_opacity: BOUNDARY_FILL_OPACITY,
            fill_color: fill_color.to_string(),
        }
    }
}

/// Summary matching a boundary, if any
///
/// **Public** - also used for popups by the presentation layer
pub fn summary_for<'a>(
    boundary: &BoundaryFeature,
    summaries: &'a CountySummaries,
) -> Option<&'a CountySummary> {
    summaries.get(&boundary.county_key()?)
}

/// Fill color of a county on a layer
///
/// **Public** - style without the fixed stroke settings
pub fn county_color<'t>(
    summary: Option<&CountySummary>,
    layer: ChoroplethLayer,
    tables: &'t ChoroplethTables,
) -> &'t str {
    classify(summary.map(|s| layer.statistic(s)), layer.table(tables))
}

/// Style callback for one boundary feature
///
/// **Public** - main entry point for styling
pub fn style_for_boundary(
    boundary: &BoundaryFeature,
    summaries: &CountySummaries,
    layer: ChoroplethLayer,
    tables: &ChoroplethTables,
) -> FeatureStyle {
    let summary = summary_for(boundary, summaries);
    FeatureStyle::with_fill(county_color(summary, layer, tables))
}

/// Copy the boundaries into a FeatureCollection with styles baked in
///
/// **Public** - produces the styled GeoJSON consumed by the map page
///
/// Each feature's properties gain `count_style`, `cost_style` and
/// `project_summary` (null for unmatched counties).
pub fn style_boundaries(
    boundaries: &[BoundaryFeature],
    summaries: &CountySummaries,
    tables: &ChoroplethTables,
) -> Value {
    let mut unmatched = 0usize;

    let features: Vec<Value> = boundaries
        .iter()
        .map(|boundary| {
            let summary = summary_for(boundary, summaries);
            if summary.is_none() {
                unmatched += 1;
                debug!("No projects matched boundary {:?}", boundary.county);
            }

            let mut properties = boundary.properties.clone();
            properties.insert(
                "count_style".to_string(),
                json!(style_for_boundary(boundary, summaries, ChoroplethLayer::ProjectCount, tables)),
            );
            properties.insert(
                "cost_style".to_string(),
                json!(style_for_boundary(boundary, summaries, ChoroplethLayer::AverageCost, tables)),
            );
            properties.insert("project_summary".to_string(), json!(summary));

            json!({
                "type": "Feature",
                "properties": properties,
                "geometry": boundary.geometry,
            })
        })
        .collect();

    if unmatched > 0 {
        warn!(
            "{} of {} boundaries have no matching county data",
            unmatched,
            boundaries.len()
        );
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::NO_DATA_COLOR;

    fn boundary(county: Option<&str>) -> BoundaryFeature {
        let mut properties = serde_json::Map::new();
        if let Some(name) = county {
            properties.insert("COUNTY".to_string(), json!(name));
        }
        BoundaryFeature {
            county: county.map(str::to_string),
            properties,
            geometry: Value::Null,
        }
    }

    fn summaries() -> CountySummaries {
        let mut map = CountySummaries::new();
        map.insert(
            "NAIROBI".to_string(),
            CountySummary {
                project_count: 501,
                missing_from_map_count: 0,
                total_cost: 6e8,
                cost_missing_count: 500,
                average_cost: 6e8,
            },
        );
        map
    }

    #[test]
    fn test_style_matches_case_insensitively() {
        let tables = ChoroplethTables::default();
        let style = style_for_boundary(
            &boundary(Some("Nairobi")),
            &summaries(),
            ChoroplethLayer::ProjectCount,
            &tables,
        );

        assert_eq!(
            style,
            FeatureStyle {
                weight: 2,
                opacity: 0.1,
                color: "black".to_string(),
                fill_opacity: 0.7,
                fill_color: "#8c2d04".to_string(),
            }
        );
    }

    #[test]
    fn test_cost_layer() {
        let tables = ChoroplethTables::default();
        let style = style_for_boundary(
            &boundary(Some("NAIROBI")),
            &summaries(),
            ChoroplethLayer::AverageCost,
            &tables,
        );
        assert_eq!(style.fill_color, "#fff7bc");
    }

    #[test]
    fn test_unmatched_and_unnamed_are_no_data() {
        let tables = ChoroplethTables::default();
        for b in [boundary(Some("Wajir")), boundary(None)] {
            for layer in [ChoroplethLayer::ProjectCount, ChoroplethLayer::AverageCost] {
                let style = style_for_boundary(&b, &summaries(), layer, &tables);
                assert_eq!(style.fill_color, NO_DATA_COLOR);
            }
        }
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let value = json!(FeatureStyle::with_fill("#ffffe5"));
        assert_eq!(value["fillOpacity"], json!(0.7));
        assert_eq!(value["fillColor"], json!("#ffffe5"));
    }

    #[test]
    fn test_style_boundaries() {
        let tables = ChoroplethTables::default();
        let styled = style_boundaries(
            &[boundary(Some("Nairobi")), boundary(Some("Wajir"))],
            &summaries(),
            &tables,
        );

        let features = styled["features"].as_array().unwrap();
        assert_eq!(styled["type"], json!("FeatureCollection"));
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["COUNTY"], json!("Nairobi"));
        assert_eq!(features[0]["properties"]["count_style"]["fillColor"], json!("#8c2d04"));
        assert_eq!(features[0]["properties"]["project_summary"]["project_count"], json!(501));
        assert_eq!(features[1]["properties"]["project_summary"], Value::Null);
        assert_eq!(features[1]["properties"]["cost_style"]["fillColor"], json!(NO_DATA_COLOR));
    }
}
