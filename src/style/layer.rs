//! The two choropleth layers.

use crate::aggregator::CountySummary;
use crate::classify::{ChoroplethTables, ThresholdTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which statistic shades the counties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoroplethLayer {
    #[default]
    #[serde(rename = "project_count", alias = "count")]
    ProjectCount,

    #[serde(rename = "project_cost", alias = "cost", alias = "average_cost")]
    AverageCost,
}

impl ChoroplethLayer {
    /// Value of the layer radio button; also the serde name
    pub fn as_str(self) -> &'static str {
        match self {
            ChoroplethLayer::ProjectCount => "project_count",
            ChoroplethLayer::AverageCost => "project_cost",
        }
    }

    /// Legend heading
    pub fn title(self) -> &'static str {
        match self {
            ChoroplethLayer::ProjectCount => "Projects per county",
            ChoroplethLayer::AverageCost => "Average project cost per county",
        }
    }

    /// Statistic this layer classifies
    pub fn statistic(self, summary: &CountySummary) -> f64 {
        match self {
            ChoroplethLayer::ProjectCount => summary.project_count as f64,
            ChoroplethLayer::AverageCost => summary.average_cost,
        }
    }

    pub fn table(self, tables: &ChoroplethTables) -> &ThresholdTable {
        match self {
            ChoroplethLayer::ProjectCount => &tables.count,
            ChoroplethLayer::AverageCost => &tables.cost,
        }
    }
}

impl fmt::Display for ChoroplethLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChoroplethLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" | "project_count" => Ok(ChoroplethLayer::ProjectCount),
            "cost" | "project_cost" | "average_cost" => Ok(ChoroplethLayer::AverageCost),
            other => Err(format!("unknown layer '{}'", other)),
        }
    }
}
