//! Choropleth color classification.
//!
//! Maps a county statistic to a discrete color through a threshold table.
//! Classification is total: every input, including "no data", has a color.

pub mod classifier;
pub mod table;

pub use classifier::{bucket_index, classify};
pub use table::{
    cost_table, count_table, load_tables, parse_tables, ChoroplethTables, ColorBucket,
    ThresholdTable, BASE_COLOR,
};
