//! Rewriting deprecated book spellings to their canonical form.
//!
//! [`ReferenceUpdater`] replaces the book name of a citation using the catalog's alias
//! table and leaves chapter and verses as written:
//!
//! | Before | After |
//! |--------|-------|
//! | `1 Samuel 1:1` | `1 Samuël 1:1` |
//! | `Psalm 23` | `Psalmen 23` |
//! | `Ester 1:1` | `Esther 1:1` |
//!
//! Citations that already use canonical names are returned unchanged, so running the
//! updater twice gives the same result as running it once.

pub mod updater;

pub use updater::{ReferenceChange, ReferenceUpdater};
