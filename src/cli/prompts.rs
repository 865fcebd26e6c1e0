//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

/// Prompt for the target column among `columns`
pub fn select_target(columns: &[String]) -> Result<String> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the target (class label) column")
        .items(columns)
        .default(0)
        .interact()?;
    Ok(columns[selection].clone())
}

/// Prompt for the columns to discretize; every candidate starts selected
pub fn select_columns(candidates: &[String]) -> Result<Vec<String>> {
    let defaults = vec![true; candidates.len()];
    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select columns to discretize (space to toggle, enter to confirm)")
        .items(candidates)
        .defaults(&defaults)
        .interact()?;
    Ok(selection
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect())
}
