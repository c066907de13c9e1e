//! Value to color classification.

use super::table::ThresholdTable;

/// Color for a statistic under a threshold table
///
/// **Public** - main entry point for classification
///
/// `None` (and NaN) map to the table's no-data color. Otherwise the color of
/// the highest threshold the value strictly exceeds, or the base color.
///
/// # Example
/// ```ignore
/// assert_eq!(classify(Some(501.0), count_table()), "#8c2d04");
/// assert_eq!(classify(None, count_table()), "#d1d1d1");
/// ```
pub fn classify(value: Option<f64>, table: &ThresholdTable) -> &str {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return table.no_data_color();
    };

    table
        .buckets()
        .iter()
        .find(|bucket| value > bucket.threshold)
        .map(|bucket| bucket.color.as_str())
        .unwrap_or(table.base_color())
}

/// Bucket position of a value, 0 for the base bucket rising to `buckets().len()`
///
/// **Public** - ordering companion to `classify`
pub fn bucket_index(value: f64, table: &ThresholdTable) -> usize {
    table
        .ascending_thresholds()
        .take_while(|&threshold| value > threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::table::{cost_table, count_table, BASE_COLOR};
    use crate::utils::config::NO_DATA_COLOR;

    #[test]
    fn test_count_boundaries() {
        let table = count_table();
        assert_eq!(classify(Some(501.0), table), "#8c2d04");
        assert_eq!(classify(Some(500.0), table), "#cc4c02");
        assert_eq!(classify(Some(201.0), table), "#cc4c02");
        assert_eq!(classify(Some(101.0), table), "#ec7014");
        assert_eq!(classify(Some(51.0), table), "#fe9929");
        assert_eq!(classify(Some(21.0), table), "#fec44f");
        assert_eq!(classify(Some(11.0), table), "#fee391");
        assert_eq!(classify(Some(6.0), table), "#fff7bc");
        assert_eq!(classify(Some(5.0), table), BASE_COLOR);
        assert_eq!(classify(Some(0.0), table), BASE_COLOR);
        assert_eq!(classify(Some(-3.0), table), BASE_COLOR);
    }

    #[test]
    fn test_cost_boundaries() {
        let table = cost_table();
        assert_eq!(classify(Some(600_000_000.0), table), "#fff7bc");
        assert_eq!(classify(Some(1e9), table), "#fff7bc");
        assert_eq!(classify(Some(2e9), table), "#fee391");
        assert_eq!(classify(Some(2e12), table), "#8c2d04");
        assert_eq!(classify(Some(1e8), table), BASE_COLOR);
    }

    #[test]
    fn test_no_data() {
        assert_eq!(classify(None, count_table()), NO_DATA_COLOR);
        assert_eq!(classify(None, cost_table()), NO_DATA_COLOR);
        assert_eq!(classify(Some(f64::NAN), cost_table()), NO_DATA_COLOR);
    }

    #[test]
    fn test_bucket_index() {
        let table = count_table();
        assert_eq!(bucket_index(0.0, table), 0);
        assert_eq!(bucket_index(5.0, table), 0);
        assert_eq!(bucket_index(6.0, table), 1);
        assert_eq!(bucket_index(501.0, table), 7);
        assert_eq!(bucket_index(f64::INFINITY, table), 7);
    }

    #[test]
    fn test_bucket_index_matches_color() {
        let table = cost_table();
        for value in [0.0, 2e8, 3e9, 2e10, 7e10, 2e11, 6e11, 5e12] {
            let index = bucket_index(value, table);
            let expected = if index == 0 {
                table.base_color()
            } else {
                table.buckets()[table.buckets().len() - index].color.as_str()
            };
            assert_eq!(classify(Some(value), table), expected, "value {}", value);
        }
    }
}
