//! # bijbelquiz-refs
//!
//! Tools for keeping the biblical references of the BijbelQuiz question bank usable.
//!
//! Every question may carry a free-text citation such as `Genesis 1:1-3`. The app can
//! only open a citation whose book name is one of the 67 canonical Dutch book names, so
//! deprecated spellings (`Ester`, `Psalm`, `1 Korinthe`) break the link.
//!
//! `bijbelquiz-refs` provides:
//!
//! - **Parsing**: citations split into book, chapter and verses
//! - **Checking**: citations resolved against the canonical book table
//! - **Updating**: deprecated spellings rewritten to canonical ones, with a backup of the
//!   question bank taken before it is overwritten
//!
//! ## Example
//!
//! ```rust,no_run
//! use bijbelquiz_refs::{BookCatalog, ReferenceChecker, ReferenceUpdater};
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//!
//! let checker = ReferenceChecker::new(&catalog);
//! assert!(checker.check_reference(Some("1 Samuël 17:4")).is_valid());
//!
//! let updater = ReferenceUpdater::new(&catalog);
//! assert_eq!(updater.update_reference("Ester 1:1"), "Esther 1:1");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Canonical book names and alias table
//! - [`core`]: Parsed citations and question records
//! - [`matching`]: Resolving citations and checking a question bank
//! - [`parsing`]: Citation parser and question bank I/O
//! - [`rewrite`]: Rewriting deprecated book names
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod rewrite;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::BookCatalog;
pub use core::question::QuestionRecord;
pub use core::types::*;
pub use matching::checker::{CheckOutcome, CheckReport, ReferenceChecker};
pub use rewrite::updater::{ReferenceChange, ReferenceUpdater};
