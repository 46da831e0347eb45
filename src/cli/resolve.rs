use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::BookCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::{BookNumber, ParsedReference};
use crate::matching::checker::{CheckOutcome, ReferenceChecker};
use crate::rewrite::updater::ReferenceUpdater;

#[derive(Args)]
pub struct ResolveArgs {
    /// References to resolve, e.g. "Genesis 1:1-3"
    #[arg(required = true)]
    pub references: Vec<String>,
}

/// One resolved command-line reference
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolution {
    input: String,
    status: &'static str,
    parsed: Option<ParsedReference>,
    book_number: Option<BookNumber>,
    canonical_name: Option<String>,
    /// Canonical spelling suggested by the alias table, when it differs from the input
    suggestion: Option<String>,
}

impl Resolution {
    fn new(
        input: &str,
        outcome: CheckOutcome,
        catalog: &BookCatalog,
        updater: &ReferenceUpdater<'_>,
    ) -> Self {
        let updated = updater.update_reference(input);
        let suggestion = (updated != input).then_some(updated);

        let (status, parsed, book_number) = match outcome {
            CheckOutcome::Blank => ("blank", None, None),
            CheckOutcome::Resolved { parsed, number } => ("resolved", Some(parsed), Some(number)),
            CheckOutcome::Unresolved { parsed } => ("unknown_book", Some(parsed), None),
            CheckOutcome::Unparseable => ("unparseable", None, None),
        };

        Self {
            input: input.to_string(),
            status,
            parsed,
            canonical_name: book_number
                .and_then(|n| catalog.book(n))
                .map(|b| b.name.clone()),
            book_number,
            suggestion,
        }
    }

    fn is_valid(&self) -> bool {
        matches!(self.status, "blank" | "resolved")
    }
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or any reference fails to resolve.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: ResolveArgs,
    format: OutputFormat,
    catalog_path: Option<&Path>,
    _verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let checker = ReferenceChecker::new(&catalog);
    let updater = ReferenceUpdater::new(&catalog);

    let resolutions: Vec<Resolution> = args
        .references
        .iter()
        .map(|r| Resolution::new(r, checker.check_reference(Some(r.as_str())), &catalog, &updater))
        .collect();

    match format {
        OutputFormat::Text => print_text_resolutions(&resolutions),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolutions)?),
        OutputFormat::Tsv => print_tsv_resolutions(&resolutions),
    }

    let failed = resolutions.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} references could not be resolved", resolutions.len());
    }

    Ok(())
}

fn describe(parsed: &ParsedReference) -> String {
    let mut out = format!("chapter {}", parsed.chapter);
    match (parsed.start_verse, parsed.end_verse) {
        (Some(start), Some(end)) => out.push_str(&format!(", verses {start}-{end}")),
        (Some(start), None) => out.push_str(&format!(", verse {start}")),
        (None, Some(end)) => out.push_str(&format!(", up to verse {end}")),
        (None, None) => {}
    }
    out
}

fn print_text_resolutions(resolutions: &[Resolution]) {
    for r in resolutions {
        let detail = match (&r.parsed, &r.canonical_name, r.book_number) {
            (Some(parsed), Some(name), Some(number)) => {
                format!("{name} (#{number}), {}", describe(parsed))
            }
            (Some(parsed), _, _) => format!("unknown book '{}'", parsed.book),
            _ if r.status == "blank" => "no reference".to_string(),
            _ => "unrecognized reference".to_string(),
        };
        println!("{} => {detail}", r.input);

        if let Some(suggestion) = &r.suggestion {
            println!("  suggested spelling: {suggestion}");
        }
    }
}

fn print_tsv_resolutions(resolutions: &[Resolution]) {
    println!("input\tstatus\tbook_number\tcanonical_name\tchapter\tstart_verse\tend_verse\tsuggestion");
    for r in resolutions {
        let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.input,
            r.status,
            r.book_number.map(|n| n.to_string()).unwrap_or_default(),
            r.canonical_name.as_deref().unwrap_or_default(),
            opt(r.parsed.as_ref().map(|p| p.chapter)),
            opt(r.parsed.as_ref().and_then(|p| p.start_verse)),
            opt(r.parsed.as_ref().and_then(|p| p.end_verse)),
            r.suggestion.as_deref().unwrap_or_default(),
        );
    }
}
