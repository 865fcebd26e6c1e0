//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::discretizer::{BinLabeling, MethodKind, MethodParams};

/// Discretize - bin numeric columns with Ameva, MDLP, FUSINTER or unsupervised methods
#[derive(Parser, Debug)]
#[command(name = "discretize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Columns to discretize (comma-separated).
    /// Defaults to every column except the target.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Target (class label) column, required by supervised methods.
    /// If not provided, will be selected interactively from available columns.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Discretization method.
    /// Options: "ameva" (default), "mdlp", "fusinter", "percentile", "equal-size",
    /// "manual", "random", "unique"
    #[arg(short, long, default_value = "ameva")]
    pub method: MethodKind,

    /// Discretized value of each bin for supervised methods: "median" or "ordinal".
    /// Defaults to median for Ameva and MDLP, ordinal for FUSINTER.
    #[arg(long)]
    pub labeling: Option<BinLabeling>,

    /// Number of classes for percentile discretization
    #[arg(long, default_value = "10", value_parser = validate_bins)]
    pub bins: usize,

    /// Samples per class for equal-size discretization (0 picks sqrt of the sample count)
    #[arg(long, default_value = "0")]
    pub class_size: usize,

    /// Upper class boundaries for manual discretization (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub boundaries: Vec<f64>,

    /// FUSINTER sensitivity to the sample count of an interval (> 0)
    #[arg(long, default_value = "1.0", value_parser = validate_lambda)]
    pub lambda: f64,

    /// FUSINTER trade-off between entropy and interval count (0.0 to 1.0)
    #[arg(long, default_value = "0.975", value_parser = validate_alpha)]
    pub alpha: f64,

    /// Seed for the random baseline; omit for a fresh draw each run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_discretized' suffix (e.g., data.csv → data_discretized.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the fitted transitions next to the output as JSON
    #[arg(long, default_value = "false")]
    pub export_json: bool,

    /// Skip interactive selection prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Log optimizer decisions to stderr (filter with RUST_LOG)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with a '_discretized' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| sibling_path(input, "_discretized", None)),
        )
    }

    /// Path of the JSON transitions export, derived from the input file.
    pub fn transitions_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(sibling_path(input, "_transitions", Some("json")))
    }

    /// Collect the method parameters given on the command line.
    pub fn method_params(&self) -> MethodParams {
        MethodParams {
            labeling: self.labeling,
            bins: self.bins,
            class_size: self.class_size,
            boundaries: self.boundaries.clone(),
            lambda: self.lambda,
            alpha: self.alpha,
            seed: self.seed,
        }
    }
}

fn sibling_path(input: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = extension.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("parquet")
    });
    parent.join(format!("{}{}.{}", stem, suffix, extension))
}

/// Validator for bins parameter
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid class count", s))?;

    if value == 0 {
        Err("bins must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

/// Validator for lambda parameter
fn validate_lambda(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value <= 0.0 {
        Err(format!("lambda must be greater than 0.0, got {}", value))
    } else {
        Ok(value)
    }
}

/// Validator for alpha parameter
fn validate_alpha(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!("alpha must be between 0.0 and 1.0, got {}", value))
    } else {
        Ok(value)
    }
}
