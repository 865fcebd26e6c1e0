//! Tests for dataset loading and saving

use discretizers::pipeline::{
    get_column_names, load_dataset_with_progress, save_dataset, scan_dataset, FileFormat,
};
use std::path::Path;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_csv() {
    let mut df = create_test_dataframe();
    let (_temp_dir, path) = create_temp_csv(&mut df);

    let (loaded, rows, cols, memory_mb) = load_dataset_with_progress(&path, 100).unwrap();
    assert_eq!(rows, 10);
    assert_eq!(cols, 4);
    assert!(memory_mb >= 0.0);
    assert_has_columns(&loaded, &["target", "feature_good", "feature_missing", "color"]);
}

#[test]
fn test_load_parquet() {
    let mut df = create_test_dataframe();
    let (_temp_dir, path) = create_temp_parquet(&mut df);

    let (_, rows, cols, _) = load_dataset_with_progress(&path, 100).unwrap();
    assert_eq!((rows, cols), (10, 4));
}

#[test]
fn test_column_names_from_schema() {
    let mut df = create_test_dataframe();
    let (_temp_dir, path) = create_temp_csv(&mut df);

    let names = get_column_names(&path).unwrap();
    assert_eq!(names, vec!["target", "feature_good", "feature_missing", "color"]);
}

#[test]
fn test_full_schema_scan() {
    let mut df = create_test_dataframe();
    let (_temp_dir, path) = create_temp_csv(&mut df);
    assert!(scan_dataset(&path, 0).is_ok());
}

#[test]
fn test_unsupported_format() {
    assert!(FileFormat::from_path(Path::new("data.xlsx")).is_err());
    assert!(load_dataset_with_progress(Path::new("data.xlsx"), 100).is_err());
}

#[test]
fn test_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.parquet");
    assert!(load_dataset_with_progress(&path, 100).is_err());
}

#[test]
fn test_save_csv_round_trip() {
    let mut df = create_test_dataframe();
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.csv");

    save_dataset(&mut df, &path).unwrap();
    let (_, rows, cols, _) = load_dataset_with_progress(&path, 100).unwrap();
    assert_eq!((rows, cols), (10, 4));
}
