//! Fitting and applying one discretizer per feature column

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use super::column::{discretized_column_name, extract_values};
use crate::discretizer::{Discretizer, Method, Value};

/// A column that was discretized successfully
#[derive(Debug, Clone)]
pub struct ColumnDiscretization {
    /// Source column name
    pub column: String,
    /// Name of the appended output column
    pub output_column: String,
    /// The fitted discretizer
    pub discretizer: Discretizer,
    /// Rows used for fitting
    pub fitted_rows: usize,
    /// Discretized value per row; `None` where the source value is null
    pub values: Vec<Option<f64>>,
}

impl ColumnDiscretization {
    pub fn bin_count(&self) -> usize {
        self.discretizer.transitions().len()
    }
}

/// Fit a fresh discretizer on `column` and apply it to every non-null row.
///
/// Supervised methods fit on the rows where both value and label are present;
/// `labels` must be row-aligned with the frame.
pub fn discretize_column(
    df: &DataFrame,
    column: &str,
    labels: Option<&[Option<f64>]>,
    method: &Method,
) -> Result<ColumnDiscretization> {
    let values = extract_values(df, column)?;

    let supervised_labels = if method.is_supervised() {
        let labels = labels.ok_or_else(|| {
            anyhow::anyhow!("Method '{}' needs a target column", method.kind())
        })?;
        if labels.len() != values.len() {
            anyhow::bail!(
                "Target has {} rows but column '{}' has {}",
                labels.len(),
                column,
                values.len()
            );
        }
        Some(labels)
    } else {
        None
    };

    let mut fit_values: Vec<Value> = Vec::with_capacity(values.len());
    let mut fit_labels: Vec<f64> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let Some(value) = value else { continue };
        match supervised_labels {
            Some(labels) => {
                if let Some(label) = labels[i] {
                    fit_values.push(value.clone());
                    fit_labels.push(label);
                }
            }
            None => fit_values.push(value.clone()),
        }
    }

    if fit_values.is_empty() {
        anyhow::bail!("Column '{}' has no usable (non-null) values", column);
    }

    let mut discretizer = Discretizer::new(method.clone());
    discretizer
        .fit(&fit_values, supervised_labels.map(|_| fit_labels.as_slice()))
        .with_context(|| format!("Failed to discretize column '{}'", column))?;
    debug!(
        column,
        rows = fit_values.len(),
        bins = discretizer.transitions().len(),
        "column fitted"
    );

    let discretized = values
        .iter()
        .map(|value| value.as_ref().map(|v| discretizer.apply(v)).transpose())
        .collect::<std::result::Result<Vec<Option<f64>>, _>>()
        .with_context(|| format!("Failed to apply discretizer to column '{}'", column))?;

    Ok(ColumnDiscretization {
        column: column.to_string(),
        output_column: discretized_column_name(column),
        discretizer,
        fitted_rows: fit_values.len(),
        values: discretized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretizer::{MethodKind, MethodParams};

    fn method(kind: MethodKind) -> Method {
        Method::from_params(kind, &MethodParams::default()).unwrap()
    }

    #[test]
    fn test_supervised_skips_null_labels_but_applies_everywhere() {
        let df = df! {
            "x" => [Some(1.0f64), Some(2.0), Some(3.0), Some(4.0), None, Some(6.0)],
        }
        .unwrap();
        let labels = vec![Some(0.0), Some(0.0), Some(0.0), None, Some(1.0), Some(1.0)];

        let result = discretize_column(&df, "x", Some(&labels), &method(MethodKind::Mdlp)).unwrap();
        assert_eq!(result.fitted_rows, 4);
        assert_eq!(result.output_column, "x_disc");
        assert_eq!(result.values.len(), 6);
        assert!(result.values[3].is_some());
        assert!(result.values[4].is_none());
    }

    #[test]
    fn test_supervised_without_target_fails() {
        let df = df! { "x" => [1.0f64, 2.0] }.unwrap();
        assert!(discretize_column(&df, "x", None, &method(MethodKind::Ameva)).is_err());
    }

    #[test]
    fn test_text_column_needs_unique_method() {
        let df = df! { "color" => ["red", "blue", "red"] }.unwrap();
        assert!(discretize_column(&df, "color", None, &method(MethodKind::Percentile)).is_err());

        let result = discretize_column(&df, "color", None, &method(MethodKind::Unique)).unwrap();
        assert_eq!(result.values, vec![Some(0.0), Some(1.0), Some(0.0)]);
        assert_eq!(result.bin_count(), 2);
    }
}
