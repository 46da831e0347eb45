//! Command-line interface for bijbelquiz-refs.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: List questions whose citation names an unknown book
//! - **update**: Rewrite deprecated book spellings in the question bank
//! - **resolve**: Parse and resolve citations given on the command line
//! - **books**: List the canonical books and known aliases
//!
//! ## Usage
//!
//! ```text
//! # Check the first 100 questions of the default question bank
//! bijbelquiz-refs check
//!
//! # Check the first 500 questions of another file
//! bijbelquiz-refs check questions.json 500
//!
//! # Rewrite deprecated spellings without keeping a backup
//! bijbelquiz-refs update questions.json no-backup
//!
//! # Try out a citation
//! bijbelquiz-refs resolve "1 Samuel 17:4-10"
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::store::BookCatalog;

pub mod books;
pub mod check;
pub mod resolve;
pub mod update;

/// Question bank used when no file is given
pub const DEFAULT_QUESTIONS_PATH: &str = "app/assets/questions-nl-sv.json";

#[derive(Parser)]
#[command(name = "bijbelquiz-refs")]
#[command(author = "BijbelQuiz")]
#[command(version)]
#[command(about = "Check and normalize biblical references in the BijbelQuiz question bank")]
#[command(
    long_about = "bijbelquiz-refs keeps the biblical references of the question bank readable by the app.\n\nIt can:\n- Report questions whose reference names a book missing from the canonical Dutch book list\n- Rewrite deprecated spellings (e.g. 'Ester', 'Psalm') to their canonical form\n- Parse and resolve individual references for quick checks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom book catalog file
    #[arg(long, global = true)]
    pub catalog: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report questions whose biblical reference cannot be resolved
    Check(check::CheckArgs),

    /// Rewrite deprecated book names in the question bank
    Update(update::UpdateArgs),

    /// Parse and resolve references given as arguments
    Resolve(resolve::ResolveArgs),

    /// List canonical books and aliases
    Books(books::BooksArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the custom catalog if one is given, the embedded one otherwise
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or is invalid.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<BookCatalog> {
    let catalog = match path {
        Some(path) => BookCatalog::load_from_file(path)
            .with_context(|| format!("Loading catalog {}", path.display()))?,
        None => BookCatalog::load_embedded()?,
    };

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, no reference will resolve");
    }

    Ok(catalog)
}
