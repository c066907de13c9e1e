//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Projects costing more than this per year land in the "expensive" marker subset
pub const EXPENSIVE_PROJECT_THRESHOLD: f64 = 500_000_000.0;

/// Fill color for counties with no matching data
pub const NO_DATA_COLOR: &str = "#d1d1d1";

/// Label of the no-data legend entry
pub const NO_DATA_LABEL: &str = "No data available";

// Boundary style shared by both choropleth layers
pub const BOUNDARY_WEIGHT: u32 = 2;
pub const BOUNDARY_OPACITY: f64 = 0.1;
pub const BOUNDARY_COLOR: &str = "black";
pub const BOUNDARY_FILL_OPACITY: f64 = 0.7;

/// Property holding the county name in the boundary dataset
pub const BOUNDARY_COUNTY_FIELD: &str = "COUNTY";

// Field names for the yearly cost (different dataset exports use different names)
pub const COST_FIELD_NAMES: &[&str] = &[
    "project_cost_yearly_breakdown__",
    "project_cost_yearly",
    "yearly_cost",
];

/// Environment variable for the default project dataset path
pub const DATA_ENV_VAR: &str = "PROJECT_MAP_DATA";

/// Environment variable for the default boundary dataset path
pub const BOUNDARIES_ENV_VAR: &str = "PROJECT_MAP_BOUNDARIES";
