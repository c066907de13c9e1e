//! Terminal rendering of reports and legends.

use crate::classify::ChoroplethTables;
use crate::legend::LegendEntry;
use crate::parser::schema::MapReport;
use colored::{ColoredString, Colorize};

const SWATCH: &str = "██";

/// Print every county with its statistics and colors, busiest first
pub fn print_county_table(report: &MapReport, tables: &ChoroplethTables) {
    let mut counties: Vec<_> = report.counties.iter().collect();
    counties.sort_by(|a, b| {
        b.1.summary
            .project_count
            .cmp(&a.1.summary.project_count)
            .then_with(|| a.0.cmp(b.0))
    });

    println!("\n{}", "=".repeat(80));
    println!("{}", "COUNTY SUMMARY".bold());
    println!("{}", "=".repeat(80));
    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>20}  {}",
        "County", "Projects", "Off map", "No cost", "Average cost", "Count/Cost"
    );

    for (name, county) in counties {
        let s = &county.summary;
        println!(
            "{:<20} {:>8} {:>8} {:>8} {:>20.0}  {} {}",
            name,
            s.project_count,
            s.missing_from_map_count,
            s.cost_missing_count,
            s.average_cost,
            swatch(&county.count_color),
            swatch(&county.cost_color)
        );
    }

    println!("{}", "-".repeat(80));
    println!("{}", report.totals.summary());
    println!(
        "Markers: {} ({} expensive, {} inexpensive)",
        report.markers.all, report.markers.expensive, report.markers.inexpensive
    );
    println!(
        "No data color: {}",
        swatch(tables.count.no_data_color())
    );
    println!("{}", "=".repeat(80));
}

/// Print a legend as colored swatches
pub fn print_legend(title: &str, entries: &[LegendEntry]) {
    println!("{}", title.bold());
    for entry in entries {
        println!("  {} {:<9} {}", swatch(&entry.color), entry.color, entry.label);
    }
}

/// Colored block for a hex color, or the plain hex when it does not parse
fn swatch(color: &str) -> ColoredString {
    match parse_hex(color) {
        Some((r, g, b)) => SWATCH.truecolor(r, g, b),
        None => color.normal(),
    }
}

/// `#rrggbb` or `#rgb` to components
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#8c2d04"), Some((0x8c, 0x2d, 0x04)));
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("black"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }
}
