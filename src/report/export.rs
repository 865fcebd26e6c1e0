//! JSON export of fitted transitions

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::discretizer::{Origin, Transition};
use crate::pipeline::ColumnDiscretization;

/// Metadata about the discretization run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Crate version
    pub version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name (supervised methods only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    /// Discretization method
    pub method: String,
    /// Bin labeling, when overridden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling: Option<String>,
}

/// A single transition with its condition rendered for reading
#[derive(Serialize)]
pub struct TransitionEntry {
    pub origin: Origin,
    pub condition: String,
    pub discretized_value: f64,
}

impl From<&Transition> for TransitionEntry {
    fn from(transition: &Transition) -> Self {
        Self {
            origin: transition.origin().clone(),
            condition: transition.origin().output_format(),
            discretized_value: transition.discretized_value(),
        }
    }
}

/// All transitions fitted for one column
#[derive(Serialize)]
pub struct ColumnExport {
    pub column: String,
    pub output_column: String,
    pub fitted_rows: usize,
    pub transitions: Vec<TransitionEntry>,
}

/// Complete export with metadata
#[derive(Serialize)]
pub struct TransitionsExport {
    pub metadata: RunMetadata,
    pub columns: Vec<ColumnExport>,
}

/// Parameters for the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub target_column: Option<&'a str>,
    pub method: &'a str,
    pub labeling: Option<&'a str>,
}

/// Build the export structure for `results`.
pub fn build_export(results: &[ColumnDiscretization], params: &ExportParams) -> TransitionsExport {
    TransitionsExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.map(|s| s.to_string()),
            method: params.method.to_string(),
            labeling: params.labeling.map(|s| s.to_string()),
        },
        columns: results
            .iter()
            .map(|result| ColumnExport {
                column: result.column.clone(),
                output_column: result.output_column.clone(),
                fitted_rows: result.fitted_rows,
                transitions: result
                    .discretizer
                    .transitions()
                    .iter()
                    .map(TransitionEntry::from)
                    .collect(),
            })
            .collect(),
    }
}

/// Export fitted transitions to a JSON file
///
/// # Arguments
/// * `results` - All successfully discretized columns
/// * `output_path` - Path to write the JSON file
/// * `params` - Export parameters for metadata
pub fn export_transitions(
    results: &[ColumnDiscretization],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_export(results, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize transitions to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write transitions to {}", output_path.display()))?;

    Ok(())
}
