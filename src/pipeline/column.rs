//! Moving column data between polars and the discretizer

use std::collections::HashMap;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::discretizer::Value;

/// Suffix of the columns holding discretized values
pub const DISCRETIZED_SUFFIX: &str = "_disc";

/// Name of the output column for `column`
pub fn discretized_column_name(column: &str) -> String {
    format!("{}{}", column, DISCRETIZED_SUFFIX)
}

/// Extract a column as discretizer values; nulls stay `None`.
///
/// Numeric and boolean columns become numbers, everything else text.
pub fn extract_values(df: &DataFrame, name: &str) -> Result<Vec<Option<Value>>> {
    let col = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;

    let values = if col.dtype().is_primitive_numeric() || col.dtype() == &DataType::Boolean {
        let float_col = col.cast(&DataType::Float64)?;
        float_col
            .f64()?
            .into_iter()
            .map(|v| v.map(Value::Number))
            .collect()
    } else {
        let string_col = col.cast(&DataType::String)?;
        string_col
            .str()?
            .into_iter()
            .map(|v| v.map(Value::from))
            .collect()
    };

    Ok(values)
}

/// Extract a target column as numeric class labels; nulls stay `None`.
///
/// Numeric targets are used as they are. Text targets are coded 0, 1, 2, ... in order
/// of first appearance.
pub fn extract_labels(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = df
        .column(name)
        .with_context(|| format!("Target column '{}' not found", name))?;

    if col.null_count() == col.len() {
        anyhow::bail!("Target column '{}' contains only null values", name);
    }

    if col.dtype().is_primitive_numeric() || col.dtype() == &DataType::Boolean {
        let float_col = col.cast(&DataType::Float64)?;
        return Ok(float_col.f64()?.into_iter().collect());
    }

    let string_col = col.cast(&DataType::String)?;
    let mut codes: HashMap<String, f64> = HashMap::new();
    let labels = string_col
        .str()?
        .into_iter()
        .map(|v| {
            v.map(|s| {
                let next = codes.len() as f64;
                *codes.entry(s.to_string()).or_insert(next)
            })
        })
        .collect();

    Ok(labels)
}

/// Append (or replace) the discretized output column for `column`.
pub fn append_discretized(df: &mut DataFrame, column: &str, values: Vec<Option<f64>>) -> Result<()> {
    let name = discretized_column_name(column);
    df.with_column(Column::new(name.as_str().into(), values))
        .with_context(|| format!("Failed to add column '{}'", name))?;
    Ok(())
}
