//! Core data types for biblical reference handling.
//!
//! - [`ParsedReference`]: a citation split into book, chapter and optional verses
//! - [`BookNumber`]: the fixed ordinal (1-67) of a canonical book
//! - [`QuestionRecord`]: one entry of the question bank, kept as raw JSON
//!
//! ## Reference Formats
//!
//! | Input | Book | Chapter | Verses |
//! |-------|------|---------|--------|
//! | `Genesis 1:1-3` | Genesis | 1 | 1-3 |
//! | `Psalmen 23` | Psalmen | 23 | - |
//! | `Psalmen` | Psalmen | 1 | - |
//! | `Genesis 2 en 3` | Genesis | 2 | - |

pub mod question;
pub mod types;

pub use question::QuestionRecord;
pub use types::{BookNumber, ParsedReference};
