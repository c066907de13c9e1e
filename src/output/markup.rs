//! Legend markup output writer.
//!
//! Writes the legend HTML fragments next to the other map assets.

use super::json::{create_parent_dirs, validate_path};
use crate::legend::{legend_html, LegendEntry};
use crate::style::ChoroplethLayer;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write an HTML fragment to a file
///
/// **Public** - main entry point for markup output
pub fn write_markup(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Markup written to {} ({} bytes)",
        output_path.display(),
        content.len()
    );

    Ok(())
}

/// Write a layer's legend as `legend-<layer>.html` inside `dir`
///
/// **Public** - returns the path written
pub fn write_legend(
    layer: ChoroplethLayer,
    entries: &[LegendEntry],
    dir: impl AsRef<Path>,
) -> Result<PathBuf, OutputError> {
    let path = dir.as_ref().join(format!("legend-{}.html", layer.as_str()));
    write_markup(&legend_html(layer.title(), entries), &path)?;
    Ok(path)
}
