//! Everything the map page needs, derived once from the datasets.
//!
//! `MapState` is built from scratch whenever the input changes and is
//! read-only afterwards. The view state decides which parts are on display.

use super::state::ViewState;
use crate::aggregator::{
    aggregate_counties, build_markers, calculate_totals, CountySummaries, Marker, MarkerSet,
};
use crate::classify::ChoroplethTables;
use crate::legend::{build_legend, LegendEntry};
use crate::parser::schema::{BoundaryFeature, CountyReport, MapReport, ProjectRecord};
use crate::style::{county_color, style_for_boundary, ChoroplethLayer, FeatureStyle};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::info;

/// Derived data behind the map
#[derive(Debug, Clone)]
pub struct MapState {
    summaries: CountySummaries,
    markers: MarkerSet,
    boundaries: Vec<BoundaryFeature>,
    tables: ChoroplethTables,
    count_legend: Vec<LegendEntry>,
    cost_legend: Vec<LegendEntry>,
}

impl MapState {
    /// Aggregate, partition and build legends in one pass
    ///
    /// **Public** - main constructor
    pub fn build(
        records: &[ProjectRecord],
        boundaries: Vec<BoundaryFeature>,
        tables: ChoroplethTables,
    ) -> Self {
        let summaries = aggregate_counties(records);
        let markers = build_markers(records);

        info!(
            "Map state: {} counties, {} markers, {} boundaries",
            summaries.len(),
            markers.all().len(),
            boundaries.len()
        );

        Self {
            count_legend: build_legend(&tables.count),
            cost_legend: build_legend(&tables.cost),
            summaries,
            markers,
            boundaries,
            tables,
        }
    }

    pub fn summaries(&self) -> &CountySummaries {
        &self.summaries
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn boundaries(&self) -> &[BoundaryFeature] {
        &self.boundaries
    }

    pub fn tables(&self) -> &ChoroplethTables {
        &self.tables
    }

    /// Legend for a layer
    pub fn legend(&self, layer: ChoroplethLayer) -> &[LegendEntry] {
        match layer {
            ChoroplethLayer::ProjectCount => &self.count_legend,
            ChoroplethLayer::AverageCost => &self.cost_legend,
        }
    }

    /// Legend of the layer on display
    pub fn active_legend(&self, view: &ViewState) -> &[LegendEntry] {
        self.legend(view.layer)
    }

    /// Markers passing the cost filter
    pub fn visible_markers(&self, view: &ViewState) -> Vec<&Marker> {
        self.markers.subset(view.markers)
    }

    /// Styles of every boundary on the active layer, in boundary order
    pub fn boundary_styles(&self, view: &ViewState) -> Vec<FeatureStyle> {
        self.boundaries
            .iter()
            .map(|b| style_for_boundary(b, &self.summaries, view.layer, &self.tables))
            .collect()
    }

    /// Snapshot of the statistics for the JSON report
    ///
    /// **Public** - `source` names the dataset the state was built from
    pub fn report(&self, source: &str) -> MapReport {
        let counties = self
            .summaries
            .iter()
            .map(|(name, summary)| {
                let entry = CountyReport {
                    summary: summary.clone(),
                    count_color: county_color(Some(summary), ChoroplethLayer::ProjectCount, &self.tables)
                        .to_string(),
                    cost_color: county_color(Some(summary), ChoroplethLayer::AverageCost, &self.tables)
                        .to_string(),
                };
                (name.clone(), entry)
            })
            .collect();

        MapReport {
            version: SCHEMA_VERSION.to_string(),
            source: source.to_string(),
            totals: calculate_totals(&self.summaries),
            markers: self.markers.counts(),
            counties,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
