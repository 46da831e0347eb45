//! Parsers for citations and for the question bank file.
//!
//! - **Citations**: split free-text references such as `Genesis 1:1-3` into a
//!   [`ParsedReference`](crate::core::types::ParsedReference)
//! - **Question bank**: load and save the JSON array of question records, and write the
//!   `.backup` copy taken before an overwrite
//!
//! ## Example
//!
//! ```rust,no_run
//! use bijbelquiz_refs::BookCatalog;
//! use bijbelquiz_refs::parsing::reference::parse_reference;
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let parsed = parse_reference("Genesis 1:1-3", &catalog).unwrap();
//! assert_eq!(parsed.book, "Genesis");
//! assert_eq!(parsed.start_verse, Some(1));
//! ```
//!
//! ## Recognized Citation Forms
//!
//! | Form | Example |
//! |------|---------|
//! | Book chapter | `Psalmen 23` |
//! | Book chapter:verse | `Johannes 3:16` |
//! | Book chapter:start-end | `Genesis 1:1-3` |
//! | Book chapter en chapter | `Genesis 2 en 3` |
//! | Bare canonical book | `Psalmen` |

pub mod questions;
pub mod reference;
