//! Legends for the choropleth layers.
//!
//! Builds the ordered (color, range) pairs for a threshold table and renders
//! them as markup. Legends for the built-in tables are computed once.

pub mod builder;
pub mod markup;

pub use builder::{build_legend, cost_legend, count_legend, format_bound, LegendEntry};
pub use markup::legend_html;
