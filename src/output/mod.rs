//! Output writers for reports, styled boundaries and legends.
//!
//! This module handles writing data to disk in various formats:
//! - JSON county reports
//! - Styled boundary GeoJSON
//! - Legend HTML fragments

pub mod json;
pub mod markup;

// Re-export main functions
pub use json::{read_report, write_json, write_report};
pub use markup::{write_legend, write_markup};
