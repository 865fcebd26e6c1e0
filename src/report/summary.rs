//! Discretization summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::discretizer::{round_to_two, Transition};
use crate::pipeline::ColumnDiscretization;

/// A column that could not be discretized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedColumn {
    pub column: String,
    pub reason: String,
}

/// Summary of one discretization run
#[derive(Debug, Default)]
pub struct DiscretizationSummary {
    pub method: String,
    pub total_rows: usize,
    pub columns: Vec<ColumnRow>,
    pub skipped: Vec<SkippedColumn>,
}

/// One summary line per discretized column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRow {
    pub column: String,
    pub output_column: String,
    pub bins: usize,
    pub fitted_rows: usize,
}

impl DiscretizationSummary {
    pub fn new(method: impl Into<String>, total_rows: usize) -> Self {
        Self {
            method: method.into(),
            total_rows,
            ..Default::default()
        }
    }

    pub fn add_column(&mut self, result: &ColumnDiscretization) {
        self.columns.push(ColumnRow {
            column: result.column.clone(),
            output_column: result.output_column.clone(),
            bins: result.bin_count(),
            fitted_rows: result.fitted_rows,
        });
    }

    pub fn add_skipped(&mut self, column: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedColumn {
            column: column.into(),
            reason: reason.into(),
        });
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Output").add_attribute(Attribute::Bold),
            Cell::new("Bins").add_attribute(Attribute::Bold),
            Cell::new("Fitted Rows").add_attribute(Attribute::Bold),
        ]);

        for row in &self.columns {
            let coverage = if self.total_rows > 0 {
                row.fitted_rows as f64 / self.total_rows as f64 * 100.0
            } else {
                0.0
            };
            table.add_row(vec![
                Cell::new(&row.column),
                Cell::new(&row.output_column).fg(Color::Cyan),
                Cell::new(row.bins)
                    .fg(if row.bins > 1 { Color::Green } else { Color::Yellow })
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{} ({:.1}%)", row.fitted_rows, coverage))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("DISCRETIZATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!(
            "      Method: {}   Discretized: {}   Skipped: {}",
            style(&self.method).yellow(),
            style(self.columns.len()).green().bold(),
            style(self.skipped.len()).red()
        );
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.skipped.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped Columns").yellow(),
                style(format!("({})", self.skipped.len())).dim()
            );
            for skipped in &self.skipped {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    skipped.column,
                    style(format!("({})", skipped.reason)).dim()
                );
            }
        }
    }
}

/// Table of the transitions fitted for one column
pub fn transitions_table(transitions: &[Transition]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Bin").add_attribute(Attribute::Bold),
        Cell::new("Condition").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for (i, transition) in transitions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Right),
            Cell::new(transition.origin().output_format()),
            Cell::new(round_to_two(transition.discretized_value()))
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print the transitions of every discretized column
pub fn display_transitions(results: &[ColumnDiscretization]) {
    for result in results {
        println!();
        println!(
            "    {} {}",
            style("▸").cyan(),
            style(&result.column).white().bold()
        );
        for line in transitions_table(result.discretizer.transitions()).to_string().lines() {
            println!("    {}", line);
        }
    }
}
