//! Unit tests for chart projections.

use crate::helpers::{TestCsvBuilder, country_dataset, scenario_dataset};
use statboard::data::{MagnitudeBar, ProjectionError, Series, project, top_n};
use statboard::types::{ProjectionMode, Row, SortDirection};

const KEY: &str = "Country/Region";

#[test]
fn test_scenario_shares() {
    let ds = scenario_dataset();
    let top = top_n(&ds, "Confirmed", 2, SortDirection::Descending).unwrap();

    let chart = project(&ds, &top, KEY, "Confirmed", ProjectionMode::ShareOfTotal).unwrap();
    let Series::Shares(slices) = &chart.series else {
        panic!("expected shares, got {:?}", chart.series);
    };

    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["USA", "Brazil"]);
    assert!((slices[0].share - 100.0 / 180.0).abs() < 1e-12);
    assert!((slices[1].share - 80.0 / 180.0).abs() < 1e-12);
}

#[test]
fn test_shares_sum_to_one() {
    let ds = country_dataset();
    for column in ["Confirmed", "Deaths", "Recovered", "New cases"] {
        for n in [1, 5, 9] {
            let top = top_n(&ds, column, n, SortDirection::Descending).unwrap();
            let chart = project(&ds, &top, KEY, column, ProjectionMode::ShareOfTotal).unwrap();
            let Series::Shares(slices) = chart.series else {
                panic!("expected shares");
            };
            let total: f64 = slices.iter().map(|s| s.share).sum();
            assert!((total - 1.0).abs() < 1e-9, "{} top {}: {}", column, n, total);
            assert!(slices.iter().all(|s| (0.0..=1.0).contains(&s.share)));
        }
    }
}

#[test]
fn test_all_zero_is_degenerate() {
    let ds = TestCsvBuilder::new(&[KEY, "Deaths"])
        .rows(&[("Holy See", "0"), ("Greenland", "0")])
        .build();
    let rows: Vec<&Row> = ds.rows().iter().collect();

    let err = project(&ds, &rows, KEY, "Deaths", ProjectionMode::ShareOfTotal).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::DegenerateTotal {
            column: "Deaths".to_string()
        }
    );
}

#[test]
fn test_all_missing_is_degenerate() {
    let ds = TestCsvBuilder::new(&[KEY, "Deaths"])
        .row(&["A", ""])
        .row(&["B", "NA"])
        .row(&["C", "3"])
        .build();
    let missing: Vec<&Row> = ds.rows().iter().take(2).collect();

    assert!(matches!(
        project(&ds, &missing, KEY, "Deaths", ProjectionMode::ShareOfTotal),
        Err(ProjectionError::DegenerateTotal { .. })
    ));
}

#[test]
fn test_empty_column_is_not_numeric() {
    // A column with no values at all is inferred as text
    let ds = TestCsvBuilder::new(&[KEY, "Recovered"])
        .row(&["A", ""])
        .row(&["B", ""])
        .build();
    let rows: Vec<&Row> = ds.rows().iter().collect();

    assert_eq!(
        project(&ds, &rows, KEY, "Recovered", ProjectionMode::ShareOfTotal),
        Err(ProjectionError::NotNumeric("Recovered".to_string()))
    );
}

#[test]
fn test_negative_share_is_rejected() {
    let ds = TestCsvBuilder::new(&[KEY, "New recovered"])
        .rows(&[("A", "5"), ("B", "-2")])
        .build();
    let rows: Vec<&Row> = ds.rows().iter().collect();

    let err = project(&ds, &rows, KEY, "New recovered", ProjectionMode::ShareOfTotal).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::NegativeValue {
            label: "B".to_string(),
            value: -2.0
        }
    );
}

#[test]
fn test_magnitude_keeps_ranking_order() {
    let ds = scenario_dataset();
    let top = top_n(&ds, "Confirmed", 3, SortDirection::Descending).unwrap();

    let chart = project(&ds, &top, KEY, "Confirmed", ProjectionMode::Magnitude).unwrap();
    assert_eq!(
        chart.series,
        Series::Magnitudes(vec![
            MagnitudeBar { label: "USA".into(), value: 100.0 },
            MagnitudeBar { label: "Brazil".into(), value: 80.0 },
            MagnitudeBar { label: "India".into(), value: 50.0 },
        ])
    );
    assert_eq!(chart.max_value, 100.0);
    assert_eq!(chart.min_value, 50.0);
    assert_eq!(chart.x_label, KEY);
    assert_eq!(chart.y_label, "Confirmed");
}

#[test]
fn test_raw_sequence_covers_whole_column() {
    let ds = country_dataset();
    let top = top_n(&ds, "Recovered", 2, SortDirection::Descending).unwrap();

    let chart = project(&ds, &top, KEY, "Recovered", ProjectionMode::RawSequence).unwrap();
    let Series::Sequence(points) = chart.series else {
        panic!("expected sequence");
    };

    // Every row but United Kingdom (index 8), in dataset order
    let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
    assert_eq!(points[0].value, 25198.0);
}

#[test]
fn test_projection_is_deterministic() {
    let ds = country_dataset();
    let top = top_n(&ds, "Confirmed", 5, SortDirection::Descending).unwrap();
    let a = project(&ds, &top, KEY, "Confirmed", ProjectionMode::ShareOfTotal).unwrap();
    let b = project(&ds, &top, KEY, "Confirmed", ProjectionMode::ShareOfTotal).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_overflowing_total_is_degenerate() {
    let ds = TestCsvBuilder::new(&[KEY, "Confirmed"])
        .rows(&[("A", "1e308"), ("B", "1e308")])
        .build();
    let rows: Vec<&Row> = ds.rows().iter().collect();

    assert_eq!(
        project(&ds, &rows, KEY, "Confirmed", ProjectionMode::ShareOfTotal),
        Err(ProjectionError::DegenerateTotal {
            column: "Confirmed".to_string()
        })
    );
    // Magnitudes have no total and still project
    assert!(project(&ds, &rows, KEY, "Confirmed", ProjectionMode::Magnitude).is_ok());
}
