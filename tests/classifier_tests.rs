use county_project_map::classify::{bucket_index, classify, cost_table, count_table, parse_tables};
use county_project_map::legend::{build_legend, cost_legend, count_legend};
use county_project_map::utils::config::NO_DATA_COLOR;

/// Values spread across and around every threshold
fn sample_values() -> Vec<f64> {
    let mut values = vec![-1.0, 0.0, 1.0];
    for table in [count_table(), cost_table()] {
        for threshold in table.ascending_thresholds() {
            values.extend([threshold - 1.0, threshold, threshold + 1.0]);
        }
    }
    values.push(f64::INFINITY);
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

#[test]
fn test_classifier_is_monotonic() {
    let values = sample_values();
    for table in [count_table(), cost_table()] {
        for pair in values.windows(2) {
            assert!(
                bucket_index(pair[0], table) <= bucket_index(pair[1], table),
                "{} table: {} vs {}",
                table.name(),
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_no_data_is_table_independent() {
    assert_eq!(classify(None, count_table()), NO_DATA_COLOR);
    assert_eq!(classify(None, cost_table()), NO_DATA_COLOR);
}

#[test]
fn test_top_count_bucket() {
    assert_eq!(classify(Some(501.0), count_table()), "#8c2d04");
}

#[test]
fn test_nairobi_average_cost_bucket() {
    // 6e8 exceeds only the 1e8 threshold
    assert_eq!(bucket_index(6e8, cost_table()), 1);
    assert_eq!(classify(Some(6e8), cost_table()), "#fff7bc");
}

#[test]
fn test_legend_colors_match_classifier() {
    for (table, legend) in [(count_table(), count_legend()), (cost_table(), cost_legend())] {
        assert_eq!(legend, build_legend(table).as_slice());
        assert_eq!(legend.len(), table.buckets().len() + 2);
        assert_eq!(legend[0].color, NO_DATA_COLOR);

        // Colors rise through the buckets in order
        let colors: Vec<&str> = legend[1..].iter().map(|e| e.color.as_str()).collect();
        let mut expected = vec![table.base_color()];
        expected.extend(table.buckets().iter().rev().map(|b| b.color.as_str()));
        assert_eq!(colors, expected);
    }
}

#[test]
fn test_only_top_bucket_is_open_ended() {
    for legend in [count_legend(), cost_legend()] {
        let open: Vec<_> = legend.iter().filter(|e| e.label.ends_with('+')).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(legend.last().unwrap(), open[0]);
    }
}

#[test]
fn test_custom_legend_covers_every_classifier_color() {
    let tables = parse_tables(
        r##"
        [count]
        buckets = [
            { threshold = 10, color = "#aa0000" },
            { threshold = 0, color = "#00aa00" },
        ]

        [cost]
        buckets = [{ threshold = 1e-20, color = "#0000aa" }]
        "##,
    )
    .unwrap();

    for table in [&tables.count, &tables.cost] {
        let legend = build_legend(table);
        assert_eq!(legend.len(), table.buckets().len() + 2);

        for value in [-1.0, 0.0, 1e-30, 1e-20, 1.0, 5.0, 10.0, 11.0] {
            let color = classify(Some(value), table);
            assert!(
                legend.iter().any(|e| e.color == color),
                "{} table: {} classified as {} but missing from legend",
                table.name(),
                value,
                color
            );
        }
    }
}
