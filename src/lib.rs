//! County Project Map
//!
//! Per-county aggregation, choropleth styling and legends for an
//! interactive map of development projects in Kenya.
//!
//! This crate provides the core implementation for the
//! `project-map` CLI tool. The map page itself (tiles, marker
//! clustering, popups) consumes what this crate writes.
//!
//! ## Getting Started
//!
//! ```bash
//! project-map build --data data.json --boundaries kenya_counties.geojson \
//!     --geojson counties.styled.geojson --legend-html legends --summary
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use county_project_map::{parser, view::{MapState, ViewState}};
//!
//! let records = parser::load_projects("data.json")?;
//! let state = MapState::build(&records, Vec::new(), Default::default());
//! let legend = state.active_legend(&ViewState::default());
//! ```

pub mod aggregator;
pub mod classify;
pub mod commands;
pub mod legend;
pub mod output;
pub mod parser;
pub mod style;
pub mod utils;
pub mod view;
