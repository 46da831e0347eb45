use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::catalog::store::BookCatalog;
use crate::core::question::QuestionRecord;
use crate::parsing::reference::{split_and_clause, AND_SEPARATOR};

/// Book name of one or more words followed by a chapter, anchored at the start
static AND_BOOK_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+(?:\s+\w+)*)\s+([0-9]+)").unwrap());

/// A citation rewritten by the updater
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceChange {
    pub id: String,
    pub old: String,
    pub new: String,
}

/// Rewrites deprecated book names using the catalog's alias table
pub struct ReferenceUpdater<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> ReferenceUpdater<'a> {
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// Replacement for a book name if it is a known alias (exact, then ignoring case)
    fn substitute<'b>(&'b self, book: &'b str) -> &'b str {
        self.catalog
            .canonical_for_alias_ignore_case(book)
            .unwrap_or(book)
    }

    /// Rewrite the book name of a citation.
    ///
    /// Returns `reference` unchanged when no substitution applies.
    ///
    /// In the `en` form only the book of the first clause is replaced and the result is
    /// rebuilt as `book chapter en <second clause>`, dropping any verses of the first
    /// clause.
    ///
    /// # Examples
    ///
    /// ```
    /// use bijbelquiz_refs::{BookCatalog, ReferenceUpdater};
    ///
    /// let catalog = BookCatalog::load_embedded().unwrap();
    /// let updater = ReferenceUpdater::new(&catalog);
    ///
    /// assert_eq!(updater.update_reference("Psalm 23"), "Psalmen 23");
    /// assert_eq!(updater.update_reference("Genesis 1:1"), "Genesis 1:1");
    /// ```
    #[must_use]
    pub fn update_reference(&self, reference: &str) -> String {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return reference.to_string();
        }

        if trimmed.contains(AND_SEPARATOR) {
            return self
                .update_and_form(trimmed)
                .unwrap_or_else(|| reference.to_string());
        }

        let parts: Vec<&str> = trimmed.split(' ').collect();
        match parts.split_last() {
            Some((chapter_and_verses, book_parts)) if !book_parts.is_empty() => {
                let book = book_parts.join(" ");
                let updated = self.substitute(&book);
                if updated == book {
                    reference.to_string()
                } else {
                    format!("{updated} {chapter_and_verses}")
                }
            }
            _ => {
                // Bare book name
                let updated = self.substitute(trimmed);
                if updated == trimmed {
                    reference.to_string()
                } else {
                    updated.to_string()
                }
            }
        }
    }

    /// "Book chapter en chapter"; `None` when nothing changes
    fn update_and_form(&self, reference: &str) -> Option<String> {
        let (first, second) = split_and_clause(reference)?;
        let captures = AND_BOOK_CLAUSE.captures(first)?;

        let book = &captures[1];
        let chapter = &captures[2];
        let updated = self.substitute(book);

        (updated != book).then(|| format!("{updated} {chapter}{AND_SEPARATOR}{second}"))
    }

    /// Rewrite the citation of every record that has one and return the changes in
    /// file order
    pub fn update_questions(&self, records: &mut [QuestionRecord]) -> Vec<ReferenceChange> {
        let mut changes = Vec::new();

        for record in records.iter_mut() {
            let Some(old) = record.biblical_reference().filter(|r| !r.is_empty()) else {
                continue;
            };

            let new = self.update_reference(old);
            if new != old {
                let change = ReferenceChange {
                    id: record.id(),
                    old: old.to_string(),
                    new,
                };
                tracing::debug!("{}: '{}' -> '{}'", change.id, change.old, change.new);
                record.set_biblical_reference(change.new.clone());
                changes.push(change);
            }
        }

        changes
    }
}
