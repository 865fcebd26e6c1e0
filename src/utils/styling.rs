//! Terminal styling for the discretize CLI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

const BOX_WIDTH: usize = 56;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}",
        style("┌┬┐  ┬ ┌─┐ ┌─┐ ┬─┐ ┌─┐ ┌┬┐ ┬ ┌─┐ ┌─┐").cyan().bold()
    );
    println!(
        "    {}",
        style(" ││  │ └─┐ │   ├┬┘ ├┤   │  │ ┌─┘ ├┤ ").cyan().bold()
    );
    println!(
        "    {}",
        style("─┴┘  ┴ └─┘ └─┘ ┴└─ └─┘  ┴  ┴ └─┘ └─┘").cyan().bold()
    );
    println!(
        "    {}",
        style("Supervised and unsupervised binning of numeric columns").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Values shown on the configuration card
pub struct ConfigCard<'a> {
    pub input: &'a Path,
    pub target: Option<&'a str>,
    pub output: &'a Path,
    pub method: &'a str,
    pub columns: usize,
}

/// Print configuration card
pub fn print_config(card: &ConfigCard) {
    let line = "─".repeat(BOX_WIDTH - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(BOX_WIDTH - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(card.input, 38)
    );
    println!(
        "    │  {} Target: {:<39}│",
        TARGET,
        truncate_string(card.target.unwrap_or("(none)"), 38)
    );
    println!(
        "    │  {} Output: {:<39}│",
        SAVE,
        truncate_path(card.output, 38)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Method:  {:<38}│",
        CHART,
        style(truncate_string(card.method, 37)).yellow()
    );
    println!(
        "    │  {} Columns: {:<38}│",
        CHART,
        style(card.columns).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("completed in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Discretization complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
