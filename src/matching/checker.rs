use serde::Serialize;

use crate::catalog::store::BookCatalog;
use crate::core::question::QuestionRecord;
use crate::core::types::{BookNumber, ParsedReference};
use crate::parsing::reference::parse_reference;
use crate::utils::normalize::normalize_book_name;

/// Default number of question records examined per run
pub const DEFAULT_MAX_CHECKS: usize = 100;

/// Result of checking a single citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No citation, or only whitespace
    Blank,
    /// Citation parsed and its book is in the catalog
    Resolved {
        parsed: ParsedReference,
        number: BookNumber,
    },
    /// Citation parsed but its book is unknown
    Unresolved { parsed: ParsedReference },
    /// Citation matches none of the recognized forms
    Unparseable,
}

impl CheckOutcome {
    /// Blank and resolved citations are valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Blank | Self::Resolved { .. })
    }
}

/// A question whose citation names an unknown book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailingReference {
    pub id: String,
    /// Book name as extracted from the citation, not normalized
    pub book: String,
}

/// Summary of a check run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Records looked at, including blank ones
    pub examined: usize,
    pub blank: usize,
    pub resolved: usize,
    /// Ids of records whose citation could not be parsed
    pub unparseable: Vec<String>,
    /// Records whose book could not be resolved, in file order
    pub failures: Vec<FailingReference>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.unparseable.is_empty()
    }
}

/// Checks citations against a book catalog
pub struct ReferenceChecker<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> ReferenceChecker<'a> {
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the book of a parsed citation to its canonical number
    #[must_use]
    pub fn resolve(&self, parsed: &ParsedReference) -> Option<BookNumber> {
        let normalized = normalize_book_name(&parsed.book);

        self.catalog
            .number_of(&normalized)
            .or_else(|| self.catalog.number_of_normalized(&normalized))
    }

    /// Check one citation. Missing or blank citations are valid.
    #[must_use]
    pub fn check_reference(&self, reference: Option<&str>) -> CheckOutcome {
        let Some(reference) = reference.filter(|r| !r.trim().is_empty()) else {
            return CheckOutcome::Blank;
        };

        let Some(parsed) = parse_reference(reference, self.catalog) else {
            return CheckOutcome::Unparseable;
        };

        if !parsed.has_ordered_verses() {
            tracing::debug!("Verse range out of order in '{reference}'");
        }

        match self.resolve(&parsed) {
            Some(number) => CheckOutcome::Resolved { parsed, number },
            None => CheckOutcome::Unresolved { parsed },
        }
    }

    /// Check the citations of the first `max_checks` records.
    ///
    /// The limit counts records examined, not failures found.
    #[must_use]
    pub fn check_questions(&self, records: &[QuestionRecord], max_checks: usize) -> CheckReport {
        let mut report = CheckReport::default();

        for record in records.iter().take(max_checks) {
            report.examined += 1;

            match self.check_reference(record.biblical_reference()) {
                CheckOutcome::Blank => report.blank += 1,
                CheckOutcome::Resolved { .. } => report.resolved += 1,
                CheckOutcome::Unresolved { parsed } => {
                    report.failures.push(FailingReference {
                        id: record.id(),
                        book: parsed.book,
                    });
                }
                CheckOutcome::Unparseable => {
                    let id = record.id();
                    tracing::warn!(
                        "{id}: unrecognized reference '{}'",
                        record.biblical_reference().unwrap_or_default()
                    );
                    report.unparseable.push(id);
                }
            }
        }

        tracing::info!(
            examined = report.examined,
            blank = report.blank,
            resolved = report.resolved,
            unresolved = report.failures.len(),
            unparseable = report.unparseable.len(),
            "Checked biblical references"
        );

        report
    }
}
