//! Per-county aggregation of project records.
//!
//! Counties are keyed by their uppercased name, which is also the
//! convention of the boundary dataset. The mapping is built once from the
//! full record sequence and never patched afterwards.

use crate::parser::schema::ProjectRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summaries keyed by uppercased county name
pub type CountySummaries = BTreeMap<String, CountySummary>;

/// Aggregated statistics for one county
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountySummary {
    /// Projects attributed to the county
    pub project_count: u64,

    /// Projects lacking an `x` or `y` coordinate
    pub missing_from_map_count: u64,

    /// Sum of reported yearly costs
    pub total_cost: f64,

    /// Projects with no yearly cost
    pub cost_missing_count: u64,

    /// `total_cost` over the projects that reported a cost, 0 when none did
    pub average_cost: f64,
}

impl CountySummary {
    /// Number of projects that reported a cost
    pub fn costed_count(&self) -> u64 {
        self.project_count.saturating_sub(self.cost_missing_count)
    }

    /// Add one project to the running tallies
    ///
    /// **Private** - `average_cost` is left untouched until `finalize`
    fn record(&mut self, project: &ProjectRecord) {
        self.project_count += 1;

        if !project.is_mapped() {
            self.missing_from_map_count += 1;
        }

        match project.yearly_cost {
            Some(cost) if cost > 0.0 => self.total_cost += cost,
            _ => self.cost_missing_count += 1,
        }
    }

    /// Derive `average_cost` from the final tallies
    ///
    /// **Private** - run once after every record has been seen
    fn finalize(&mut self) {
        let costed = self.costed_count();
        self.average_cost = if costed > 0 {
            self.total_cost / costed as f64
        } else {
            0.0
        };
    }
}

/// Aggregate project records into per-county summaries
///
/// **Public** - main entry point for aggregation
///
/// Records without a county are skipped. The average cost is computed after
/// all records are tallied, so the result does not depend on record order.
///
/// # Example
/// ```ignore
/// let records = load_projects("data.json")?;
/// let summaries = aggregate_counties(&records);
/// let nairobi = &summaries["NAIROBI"];
/// ```
pub fn aggregate_counties(records: &[ProjectRecord]) -> CountySummaries {
    let mut summaries = CountySummaries::new();
    let mut skipped = 0usize;

    for project in records {
        let Some(county) = project.county.as_deref() else {
            skipped += 1;
            continue;
        };

        summaries
            .entry(county.to_uppercase())
            .or_default()
            .record(project);
    }

    for summary in summaries.values_mut() {
        summary.finalize();
    }

    debug!(
        "Aggregated {} records into {} counties ({} without county)",
        records.len() - skipped,
        summaries.len(),
        skipped
    );

    summaries
}

/// Totals across every county
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub counties: usize,
    pub projects: u64,
    pub missing_from_map: u64,
    pub cost_missing: u64,
    pub total_cost: f64,
}

/// Sum the per-county summaries
///
/// **Public** - used for the report header and CLI summary
pub fn calculate_totals(summaries: &CountySummaries) -> AggregateTotals {
    summaries.values().fold(
        AggregateTotals {
            counties: summaries.len(),
            ..Default::default()
        },
        |mut totals, s| {
            totals.projects += s.project_count;
            totals.missing_from_map += s.missing_from_map_count;
            totals.cost_missing += s.cost_missing_count;
            totals.total_cost += s.total_cost;
            totals
        },
    )
}

impl AggregateTotals {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Counties: {} | Projects: {} | Off map: {} | No cost: {} | Total cost: {:.0}",
            self.counties, self.projects, self.missing_from_map, self.cost_missing, self.total_cost
        )
    }
}
