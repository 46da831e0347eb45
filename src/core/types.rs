use serde::{Deserialize, Serialize};

/// Position of a canonical book in the Dutch canon (1-67)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookNumber(pub u8);

impl BookNumber {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 67;

    /// Create a book number, rejecting values outside 1-67
    #[must_use]
    pub fn new(n: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&n).then_some(Self(n))
    }
}

impl std::fmt::Display for BookNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A citation broken into its parts.
///
/// `book` is the name exactly as written in the citation (not normalized).
/// An `end_verse` is normally accompanied by a `start_verse` no larger than it, but this
/// is not enforced; see [`ParsedReference::has_ordered_verses`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    pub book: String,
    pub chapter: u32,
    pub start_verse: Option<u32>,
    pub end_verse: Option<u32>,
}

impl ParsedReference {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            start_verse: None,
            end_verse: None,
        }
    }

    #[must_use]
    pub fn with_verses(mut self, start: Option<u32>, end: Option<u32>) -> Self {
        self.start_verse = start;
        self.end_verse = end;
        self
    }

    /// True unless an end verse is present without a start verse, or precedes it
    #[must_use]
    pub fn has_ordered_verses(&self) -> bool {
        match (self.start_verse, self.end_verse) {
            (_, None) => true,
            (Some(start), Some(end)) => start <= end,
            (None, Some(_)) => false,
        }
    }
}

impl std::fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        match (self.start_verse, self.end_verse) {
            (Some(start), Some(end)) => write!(f, ":{start}-{end}"),
            (Some(start), None) => write!(f, ":{start}"),
            (None, Some(end)) => write!(f, ":?-{end}"),
            (None, None) => Ok(()),
        }
    }
}
