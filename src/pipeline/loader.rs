//! Dataset loading and saving for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// Supported file formats, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "parquet" => Ok(FileFormat::Parquet),
            _ => anyhow::bail!(
                "Unsupported file format: '{}'. Supported formats: csv, parquet",
                extension
            ),
        }
    }
}

/// Lazily scan a dataset (CSV or Parquet based on extension).
///
/// `infer_schema_length` applies to CSV only; 0 means a full table scan.
pub fn scan_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let lf = match FileFormat::from_path(path)? {
        FileFormat::Csv => {
            let schema_length = if infer_schema_length == 0 {
                None
            } else {
                Some(infer_schema_length)
            };
            LazyCsvReader::new(path)
                .with_infer_schema_length(schema_length)
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        FileFormat::Parquet => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
    };

    Ok(lf)
}

/// Column names from the file schema, without reading the data.
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let mut lf = scan_dataset(path, 100)?;
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read schema of {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Load a dataset fully into memory behind a spinner.
///
/// Returns the frame with its row count, column count and estimated size in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = scan_dataset(path, infer_schema_length)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    finish_with_success(&spinner, "Dataset read");

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    Ok((df, rows, cols, memory_mb))
}

/// Save a dataset (CSV or Parquet based on extension)
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let format = FileFormat::from_path(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    match format {
        FileFormat::Csv => {
            let mut file = file;
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        FileFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
    }

    Ok(())
}
