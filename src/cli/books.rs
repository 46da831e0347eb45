use std::path::Path;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct BooksArgs {
    /// List deprecated spellings and their replacements instead of canonical books
    #[arg(long)]
    pub aliases: bool,
}

/// Execute books subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: BooksArgs,
    format: OutputFormat,
    catalog_path: Option<&Path>,
    _verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match format {
        OutputFormat::Text => print_text(&catalog, args.aliases),
        OutputFormat::Json => {
            let output = if args.aliases {
                serde_json::to_string_pretty(&catalog.aliases)?
            } else {
                serde_json::to_string_pretty(&catalog.books)?
            };
            println!("{output}");
        }
        OutputFormat::Tsv => print_tsv(&catalog, args.aliases),
    }

    Ok(())
}

fn print_text(catalog: &BookCatalog, aliases: bool) {
    if aliases {
        println!("Aliases ({}):", catalog.aliases.len());
        for entry in &catalog.aliases {
            println!("  {} → {}", entry.alias, entry.canonical);
        }
    } else {
        println!("Books ({}):", catalog.len());
        for book in &catalog.books {
            println!("  {:>2}  {}", book.number, book.name);
        }
    }
}

fn print_tsv(catalog: &BookCatalog, aliases: bool) {
    if aliases {
        println!("alias\tcanonical");
        for entry in &catalog.aliases {
            println!("{}\t{}", entry.alias, entry.canonical);
        }
    } else {
        println!("number\tname");
        for book in &catalog.books {
            println!("{}\t{}", book.number, book.name);
        }
    }
}
