//! discretize: bin the columns of a CSV or Parquet file
//!
//! Fits one discretizer per selected column, appends the discretized values
//! as `<column>_disc` and writes the result next to the input.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use discretizers::cli::{select_columns, select_target, Cli};
use discretizers::discretizer::Method;
use discretizers::pipeline::{
    append_discretized, discretize_column, extract_labels, get_column_names,
    load_dataset_with_progress, save_dataset,
};
use discretizers::report::{
    display_transitions, export_transitions, DiscretizationSummary, ExportParams,
};
use discretizers::utils::{
    create_progress_bar, create_spinner, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success, print_warning, ConfigCard,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("discretizers=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("Could not derive an output path from the input"))?;

    let method = Method::from_params(cli.method, &cli.method_params())?;
    let supervised = method.is_supervised();

    // Resolve target and columns, prompting unless --no-confirm is set
    let available = get_column_names(input)?;
    let target = match (&cli.target, supervised) {
        (Some(target), _) => Some(target.clone()),
        (None, false) => None,
        (None, true) if cli.no_confirm => anyhow::bail!(
            "Method '{}' needs a target column when using --no-confirm. Use -t/--target to specify.",
            cli.method
        ),
        (None, true) => Some(select_target(&available)?),
    };

    let columns = if !cli.columns.is_empty() {
        cli.columns.clone()
    } else {
        let candidates: Vec<String> = available
            .iter()
            .filter(|name| Some(name.as_str()) != target.as_deref())
            .cloned()
            .collect();
        if cli.no_confirm {
            candidates
        } else {
            select_columns(&candidates)?
        }
    };

    if columns.is_empty() {
        println!("No columns selected. Nothing to do.");
        return Ok(());
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    let method_label = format!("{} ({})", cli.method, cli.method.description());
    print_config(&ConfigCard {
        input,
        target: target.as_deref(),
        output: &output_path,
        method: &method_label,
        columns: columns.len(),
    });

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let (mut df, rows, cols, memory_mb) = load_dataset_with_progress(input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for name in columns.iter().chain(target.iter()) {
        if !column_names.contains(name) {
            anyhow::bail!(
                "Column '{}' not found in dataset. Available columns: {:?}",
                name,
                column_names
            );
        }
    }
    print_step_time(step_start.elapsed());

    // Step 2: Fit and apply one discretizer per column
    print_step_header(2, "Discretize Columns");
    let step_start = Instant::now();

    let labels = match (&target, supervised) {
        (Some(target), true) => Some(extract_labels(&df, target)?),
        _ => None,
    };

    let mut summary = DiscretizationSummary::new(cli.method.to_string(), rows);
    let mut results = Vec::with_capacity(columns.len());

    let pb = create_progress_bar(columns.len() as u64, "Discretizing");
    for column in &columns {
        pb.set_message(format!("Discretizing {}", column));
        match discretize_column(&df, column, labels.as_deref(), &method) {
            Ok(result) => {
                append_discretized(&mut df, &result.column, result.values.clone())?;
                summary.add_column(&result);
                results.push(result);
            }
            Err(err) => summary.add_skipped(column.clone(), format!("{:#}", err)),
        }
        pb.inc(1);
    }

    if summary.skipped.is_empty() {
        finish_with_success(&pb, "All columns discretized");
    } else {
        finish_with_warning(
            &pb,
            &format!("{} column(s) skipped", summary.skipped.len()),
        );
        for skipped in &summary.skipped {
            print_warning(&format!("{}: {}", skipped.column, skipped.reason));
        }
    }

    if results.is_empty() {
        anyhow::bail!("No column could be discretized");
    }
    print_count("discretized column(s)", results.len(), None);
    print_step_time(step_start.elapsed());

    // Step 3: Save output
    print_step_header(3, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if cli.export_json {
        let json_path = cli
            .transitions_path()
            .ok_or_else(|| anyhow::anyhow!("Could not derive a transitions path from the input"))?;
        let input_file = input.display().to_string();
        let method_name = cli.method.to_string();
        let labeling = cli.labeling.map(|l| l.to_string());
        export_transitions(
            &results,
            &json_path,
            &ExportParams {
                input_file: &input_file,
                target_column: target.as_deref(),
                method: &method_name,
                labeling: labeling.as_deref(),
            },
        )?;
        print_info(&format!("Transitions written to {}", json_path.display()));
    }
    print_step_time(step_start.elapsed());

    summary.display();
    display_transitions(&results);

    print_completion();

    Ok(())
}
