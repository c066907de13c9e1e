//! Choropleth styling of county boundaries.
//!
//! Produces the `{weight, opacity, color, fillOpacity, fillColor}` records the
//! map library paints each county with, for either layer.

pub mod choropleth;
pub mod layer;

pub use choropleth::{county_color, style_boundaries, style_for_boundary, summary_for, FeatureStyle};
pub use layer::ChoroplethLayer;
