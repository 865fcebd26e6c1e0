//! Shared test utilities and fixture generators

#![allow(dead_code)]

use discretizers::discretizer::{NumericOrigin, Transition, Value};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Labels of the 40-sample FUSINTER paper example; values are 1..=40
pub const PAPER_LABELS: [u8; 40] = [
    1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 1,
];

/// Split `(value, label)` pairs into fit inputs
pub fn split_pairs(pairs: &[(f64, f64)]) -> (Vec<Value>, Vec<f64>) {
    let values = pairs.iter().map(|&(v, _)| Value::Number(v)).collect();
    let labels = pairs.iter().map(|&(_, l)| l).collect();
    (values, labels)
}

/// Values 1..=n, labeled by `label_of`
pub fn labeled_range(n: usize, label_of: impl Fn(usize) -> f64) -> Vec<(f64, f64)> {
    (1..=n).map(|v| (v as f64, label_of(v))).collect()
}

/// 1..=10 with class 0 for 1..=5 and class 1 for 6..=10
pub fn two_class_pairs() -> Vec<(f64, f64)> {
    labeled_range(10, |v| if v <= 5 { 0.0 } else { 1.0 })
}

/// 1..=15 with three blocks of five samples per class
pub fn three_class_pairs() -> Vec<(f64, f64)> {
    labeled_range(15, |v| ((v - 1) / 5) as f64)
}

/// Values 1..=4, each seen once with class 0 and once with class 1
pub fn equal_distribution_pairs() -> Vec<(f64, f64)> {
    (1..=4)
        .flat_map(|v| [(v as f64, 1.0), (v as f64, 0.0)])
        .collect()
}

/// The FUSINTER paper example, 40 samples
pub fn paper_pairs() -> Vec<(f64, f64)> {
    PAPER_LABELS
        .iter()
        .enumerate()
        .map(|(i, &l)| ((i + 1) as f64, l as f64))
        .collect()
}

/// 60 samples: 20 of class 1, a noisy middle section, then mostly class 1 again
pub fn sixty_sample_pairs() -> Vec<(f64, f64)> {
    let mut labels = vec![1u8; 20];
    labels.extend([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0]);
    labels.extend([1u8; 12]);
    labels.extend([0u8; 4]);
    labels.extend([1u8; 7]);
    labels
        .iter()
        .enumerate()
        .map(|(i, &l)| ((i + 1) as f64, l as f64))
        .collect()
}

/// The 90-sample FUSINTER example with repeated values
pub fn repeated_value_pairs() -> Vec<(f64, f64)> {
    let runs: &[(f64, &[u8])] = &[
        (1.0, &[1]),
        (2.0, &[0]),
        (3.0, &[1, 1]),
        (4.0, &[1, 1]),
        (5.0, &[1, 1, 1]),
        (6.0, &[1, 1, 1]),
        (7.0, &[1, 1, 1]),
        (8.0, &[1, 1]),
        (9.0, &[1, 1, 1]),
        (10.0, &[1, 1, 1]),
        (11.0, &[1, 1, 1]),
        (12.0, &[1, 1]),
        (13.0, &[1, 1, 0]),
        (14.0, &[1, 1, 1]),
        (15.0, &[0, 0, 0]),
        (16.0, &[1, 1, 1]),
        (17.0, &[0, 0, 0]),
        (18.0, &[1, 1, 0]),
        (19.0, &[0, 0]),
        (20.0, &[1, 1]),
        (22.0, &[1, 1, 1]),
        (23.0, &[0, 0, 0]),
        (27.0, &[0, 0]),
        (28.0, &[0, 0, 0]),
        (29.0, &[0, 0, 0]),
        (30.0, &[0, 0, 0]),
        (31.0, &[0, 0, 0]),
        (33.0, &[0]),
        (34.0, &[0, 0, 0]),
        (35.0, &[0, 0, 0]),
        (36.0, &[0, 0, 0]),
        (37.0, &[0, 0, 1]),
        (38.0, &[1, 1, 0]),
        (39.0, &[0, 0]),
        (40.0, &[1, 1]),
    ];
    runs.iter()
        .flat_map(|&(v, labels)| labels.iter().map(move |&l| (v, l as f64)))
        .collect()
}

/// Numeric origin of a transition, panicking for categorical ones
pub fn numeric(transition: &Transition) -> &NumericOrigin {
    transition
        .origin()
        .as_numeric()
        .expect("expected a numeric origin")
}

/// `(min, max)` of every numeric transition
pub fn ranges(transitions: &[Transition]) -> Vec<(f64, f64)> {
    transitions
        .iter()
        .map(|t| {
            let origin = numeric(t);
            (origin.min(), origin.max())
        })
        .collect()
}

/// Discretized values of every transition
pub fn labels_of(transitions: &[Transition]) -> Vec<f64> {
    transitions.iter().map(|t| t.discretized_value()).collect()
}

/// Dataset with a two-class target, a separable feature, a noisy one and a text column
pub fn create_test_dataframe() -> DataFrame {
    df! {
        "target" => [0i32, 0, 0, 0, 0, 1, 1, 1, 1, 1],
        "feature_good" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "feature_missing" => [Some(1.0f64), None, Some(3.0), Some(4.0), None, Some(6.0), Some(7.0), None, Some(9.0), Some(10.0)],
        "color" => ["red", "blue", "red", "green", "blue", "red", "red", "green", "blue", "red"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame has the expected columns
pub fn assert_has_columns(df: &DataFrame, expected: &[&str]) {
    let actual: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for col in expected {
        assert!(
            actual.iter().any(|c| c == col),
            "Expected column '{}' not found. Available: {:?}",
            col,
            actual
        );
    }
}
