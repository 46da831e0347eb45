use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{load_catalog, OutputFormat, DEFAULT_QUESTIONS_PATH};
use crate::parsing::questions::{backup_path_for, load_questions, save_questions, write_backup};
use crate::rewrite::updater::{ReferenceChange, ReferenceUpdater};

/// Backup argument values that switch the backup off (compared case-insensitively)
pub const NO_BACKUP_VALUES: &[&str] = &["no-backup", "false", "0"];

#[derive(Args)]
pub struct UpdateArgs {
    /// Question bank (JSON array of question objects)
    #[arg(default_value = DEFAULT_QUESTIONS_PATH)]
    pub file_path: PathBuf,

    /// `no-backup`, `false` or `0` skips writing `<file_path>.backup`
    pub backup: Option<String>,

    /// Report changes without writing the backup or the question bank
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateArgs {
    /// Whether a backup copy is written before the question bank is overwritten
    #[must_use]
    pub fn backup_enabled(&self) -> bool {
        backup_enabled(self.backup.as_deref())
    }
}

/// Interpret the backup argument; anything but the values of [`NO_BACKUP_VALUES`]
/// keeps the backup on
#[must_use]
pub fn backup_enabled(flag: Option<&str>) -> bool {
    flag.map_or(true, |flag| {
        let flag = flag.to_lowercase();
        !NO_BACKUP_VALUES.contains(&flag.as_str())
    })
}

/// Execute update subcommand
///
/// The backup is written before any change is made; if it fails, the question bank is
/// left untouched.
///
/// # Errors
///
/// Returns an error if the catalog or the question bank cannot be loaded, or if the
/// backup or the updated question bank cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: UpdateArgs,
    format: OutputFormat,
    catalog_path: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<()> {
    let text = matches!(format, OutputFormat::Text);
    let path = args.file_path.as_path();
    let catalog = load_catalog(catalog_path)?;

    if text {
        println!("Loading questions from: {}", path.display());
    }
    let mut records = load_questions(path)?;
    if text {
        println!("Loaded {} questions", records.len());
    }

    let backup_path = if args.backup_enabled() && !args.dry_run {
        if text {
            println!("Creating backup: {}", backup_path_for(path).display());
        }
        Some(write_backup(path, &records)?)
    } else {
        if verbose {
            eprintln!("Skipping backup");
        }
        None
    };

    let updater = ReferenceUpdater::new(&catalog);
    let changes = updater.update_questions(&mut records);

    if text {
        for change in &changes {
            println!("Updated: {} → {}", change.old, change.new);
        }
    }

    let written = !changes.is_empty() && !args.dry_run;
    if written {
        if text {
            println!(
                "Writing {} updated questions to: {}",
                records.len(),
                path.display()
            );
        }
        save_questions(path, &records)?;
    }

    match format {
        OutputFormat::Text => print_text_summary(&changes, args.dry_run),
        OutputFormat::Json => {
            print_json_summary(path, records.len(), backup_path.as_deref(), written, &changes)?;
        }
        OutputFormat::Tsv => print_tsv_changes(&changes),
    }

    Ok(())
}

fn print_text_summary(changes: &[ReferenceChange], dry_run: bool) {
    if changes.is_empty() {
        println!("✅ No biblical references needed updating");
    } else if dry_run {
        println!(
            "Dry run: {} biblical references would be updated",
            changes.len()
        );
    } else {
        println!(
            "✅ Successfully updated {} biblical references",
            changes.len()
        );
    }
}

fn print_json_summary(
    path: &Path,
    question_count: usize,
    backup_path: Option<&Path>,
    written: bool,
    changes: &[ReferenceChange],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "file": path.display().to_string(),
        "questions": question_count,
        "backup": backup_path.map(|p| p.display().to_string()),
        "written": written,
        "updated": changes.len(),
        "changes": changes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_changes(changes: &[ReferenceChange]) {
    println!("id\told\tnew");
    for change in changes {
        println!("{}\t{}\t{}", change.id, change.old, change.new);
    }
}
