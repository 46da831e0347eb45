//! Resolving citations against the book catalog.
//!
//! - [`ReferenceChecker`]: resolves parsed citations to canonical books and checks a
//!   whole question bank
//! - [`CheckReport`]: failing references plus counters for one run
//!
//! ## Resolution
//!
//! A parsed book name resolves when its normalized form is either a canonical name
//! itself or the normalized form of a canonical name. `Genesis`, `1 Samuël` and
//! `1 Samuel` all resolve; `Ester` does not (it is an alias, handled by the updater).
//!
//! ## Example
//!
//! ```rust,no_run
//! use bijbelquiz_refs::{BookCatalog, ReferenceChecker};
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let checker = ReferenceChecker::new(&catalog);
//!
//! assert!(checker.check_reference(Some("Genesis 1:1")).is_valid());
//! assert!(!checker.check_reference(Some("Nonexistentbook 1:1")).is_valid());
//! ```

pub mod checker;

pub use checker::{CheckOutcome, CheckReport, FailingReference, ReferenceChecker};
