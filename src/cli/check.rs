use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{load_catalog, OutputFormat, DEFAULT_QUESTIONS_PATH};
use crate::matching::checker::{CheckReport, ReferenceChecker, DEFAULT_MAX_CHECKS};
use crate::parsing::questions::load_questions;

#[derive(Args)]
pub struct CheckArgs {
    /// Question bank (JSON array of question objects)
    #[arg(default_value = DEFAULT_QUESTIONS_PATH)]
    pub file_path: PathBuf,

    /// Number of questions to examine, counted from the start of the file
    #[arg(default_value_t = DEFAULT_MAX_CHECKS, allow_negative_numbers = true)]
    pub max_checks: usize,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the catalog or the question bank cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: CheckArgs,
    format: OutputFormat,
    catalog_path: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let records = load_questions(&args.file_path)?;

    if verbose {
        eprintln!(
            "Checking up to {} of {} questions in {}",
            args.max_checks.min(records.len()),
            records.len(),
            args.file_path.display()
        );
    }

    let checker = ReferenceChecker::new(&catalog);
    let report = checker.check_questions(&records, args.max_checks);

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&args.file_path, &report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &CheckReport) {
    for failure in &report.failures {
        println!("{}: {}", failure.id, failure.book);
    }
}

fn print_json_report(path: &Path, report: &CheckReport) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "file": path.display().to_string(),
        "examined": report.examined,
        "blank": report.blank,
        "resolved": report.resolved,
        "unparseable": report.unparseable,
        "failures": report.failures,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &CheckReport) {
    println!("id\tbook");
    for failure in &report.failures {
        println!("{}\t{}", failure.id, failure.book);
    }
}
