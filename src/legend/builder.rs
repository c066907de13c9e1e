//! Legend entries derived from a threshold table.
//!
//! The legend lists the no-data color first, then the base bucket, then one
//! entry per threshold from the lowest upward. Colors are taken from the
//! table's own buckets, so every color the classifier can return appears
//! exactly once.

use crate::classify::{cost_table, count_table, ThresholdTable};
use crate::utils::config::NO_DATA_LABEL;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Separator between the bounds of a closed range
pub const RANGE_SEPARATOR: char = '\u{2013}';

/// One swatch in a legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

/// Build the legend for a table
///
/// **Public** - main entry point for legend generation
///
/// Ranges read `"{from}–{to}"`; the top bucket is open-ended, `"{from}+"`.
/// The base range starts at 0 when the lowest threshold is positive and
/// reads `"{lowest} or less"` otherwise.
pub fn build_legend(table: &ThresholdTable) -> Vec<LegendEntry> {
    let thresholds: Vec<f64> = table.ascending_thresholds().collect();

    let mut entries = Vec::with_capacity(thresholds.len() + 2);
    entries.push(LegendEntry {
        color: table.no_data_color().to_string(),
        label: NO_DATA_LABEL.to_string(),
    });

    if let Some(&lowest) = thresholds.first() {
        let label = if lowest > 0.0 {
            format!("0{}{}", RANGE_SEPARATOR, format_bound(lowest))
        } else {
            format!("{} or less", format_bound(lowest))
        };
        entries.push(LegendEntry {
            color: table.base_color().to_string(),
            label,
        });
    }

    let ascending_buckets = table.buckets().iter().rev();
    for (i, bucket) in ascending_buckets.enumerate() {
        let from = bucket.threshold;
        let label = match thresholds.get(i + 1) {
            Some(&to) => format!("{}{}{}", format_bound(from), RANGE_SEPARATOR, format_bound(to)),
            None => format!("{}+", format_bound(from)),
        };

        entries.push(LegendEntry {
            color: bucket.color.clone(),
            label,
        });
    }

    entries
}

/// Cached legend for the built-in count table
pub fn count_legend() -> &'static [LegendEntry] {
    static LEGEND: OnceLock<Vec<LegendEntry>> = OnceLock::new();
    LEGEND.get_or_init(|| build_legend(count_table()))
}

/// Cached legend for the built-in cost table
pub fn cost_legend() -> &'static [LegendEntry] {
    static LEGEND: OnceLock<Vec<LegendEntry>> = OnceLock::new();
    LEGEND.get_or_init(|| build_legend(cost_table()))
}

/// Render a bound without a fractional part when it has none
pub fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, ColorBucket, BASE_COLOR};
    use crate::utils::config::NO_DATA_COLOR;
    use pretty_assertions::assert_eq;

    fn entry(color: &str, label: &str) -> LegendEntry {
        LegendEntry {
            color: color.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_count_legend() {
        assert_eq!(
            count_legend(),
            &[
                entry(NO_DATA_COLOR, "No data available"),
                entry("#ffffe5", "0–5"),
                entry("#fff7bc", "5–10"),
                entry("#fee391", "10–20"),
                entry("#fec44f", "20–50"),
                entry("#fe9929", "50–100"),
                entry("#ec7014", "100–200"),
                entry("#cc4c02", "200–500"),
                entry("#8c2d04", "500+"),
            ][..]
        );
    }

    #[test]
    fn test_cost_legend_bounds() {
        let legend = cost_legend();
        assert_eq!(legend.len(), 9);
        assert_eq!(legend[1], entry("#ffffe5", "0–100000000"));
        assert_eq!(legend[2], entry("#fff7bc", "100000000–1000000000"));
        assert_eq!(legend[8], entry("#8c2d04", "1000000000000+"));
    }

    #[test]
    fn test_legend_is_cached() {
        assert!(std::ptr::eq(count_legend(), count_legend()));
    }

    #[test]
    fn test_fractional_thresholds() {
        let table = ThresholdTable::new(
            "share",
            vec![
                ColorBucket { threshold: 0.5, color: "#222".to_string() },
                ColorBucket { threshold: 0.25, color: "#111".to_string() },
            ],
            BASE_COLOR,
            NO_DATA_COLOR,
        )
        .unwrap();

        assert_eq!(
            build_legend(&table),
            vec![
                entry(NO_DATA_COLOR, "No data available"),
                entry(BASE_COLOR, "0–0.25"),
                entry("#111", "0.25–0.5"),
                entry("#222", "0.5+"),
            ]
        );
    }

    fn table(thresholds: &[(f64, &str)]) -> ThresholdTable {
        let buckets = thresholds
            .iter()
            .map(|&(threshold, color)| ColorBucket {
                threshold,
                color: color.to_string(),
            })
            .collect();
        ThresholdTable::new("custom", buckets, BASE_COLOR, NO_DATA_COLOR).unwrap()
    }

    #[test]
    fn test_zero_threshold_keeps_base_bucket() {
        let table = table(&[(10.0, "#aa0000"), (0.0, "#00aa00")]);
        let legend = build_legend(&table);

        assert_eq!(
            legend,
            vec![
                entry(NO_DATA_COLOR, "No data available"),
                entry(BASE_COLOR, "0 or less"),
                entry("#00aa00", "0–10"),
                entry("#aa0000", "10+"),
            ]
        );
        assert_eq!(classify(Some(-1.0), &table), legend[1].color);
        assert_eq!(classify(Some(5.0), &table), legend[2].color);
    }

    #[test]
    fn test_negative_threshold() {
        let legend = build_legend(&table(&[(-5.0, "#00aa00")]));
        assert_eq!(legend[1], entry(BASE_COLOR, "-5 or less"));
        assert_eq!(legend[2], entry("#00aa00", "-5+"));
    }

    #[test]
    fn test_tiny_positive_threshold() {
        let table = table(&[(1e-20, "#00aa00")]);
        let legend = build_legend(&table);

        assert_eq!(
            legend,
            vec![
                entry(NO_DATA_COLOR, "No data available"),
                entry(BASE_COLOR, "0–0.00000000000000000001"),
                entry("#00aa00", "0.00000000000000000001+"),
            ]
        );
        assert_eq!(classify(Some(0.0), &table), BASE_COLOR);
    }

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(500.0), "500");
        assert_eq!(format_bound(1e12), "1000000000000");
        assert_eq!(format_bound(2.5), "2.5");
    }
}
