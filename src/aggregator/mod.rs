//! Aggregation of project records into county statistics and markers.
//!
//! This module transforms parsed project records into:
//! - Per-county summaries (counts, missing coordinates, costs)
//! - Totals across all counties
//! - Map markers split by yearly cost

pub mod county;
pub mod markers;

// Re-export main types and functions
pub use county::{aggregate_counties, calculate_totals, AggregateTotals, CountySummaries, CountySummary};
pub use markers::{build_markers, Marker, MarkerSet, MarkerSubset};
