use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::store::BookCatalog;
use crate::core::types::ParsedReference;
use crate::utils::normalize::normalize_book_name;

/// Separator joining two chapters of the same book ("Genesis 2 en 3")
pub const AND_SEPARATOR: &str = " en ";

/// Single-word book followed by a chapter, anchored at the start
static AND_FIRST_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s+([0-9]+)").unwrap());

static AND_SECOND_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Split a citation on the first [`AND_SEPARATOR`] into two trimmed halves.
///
/// Later separators stay in the second half.
#[must_use]
pub fn split_and_clause(reference: &str) -> Option<(&str, &str)> {
    reference
        .split_once(AND_SEPARATOR)
        .map(|(first, second)| (first.trim(), second.trim()))
}

/// Parse an all-ASCII-digit string into a positive number
fn parse_positive(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|&n| n > 0)
}

/// Parse a citation string.
///
/// Returns `None` when the string does not match any recognized form. Blank input is
/// never a match; callers that treat a blank citation as "no reference" must check for
/// it before calling.
///
/// The `en` form keeps only the book and the first chapter: verses of the first clause
/// and the whole second clause are dropped.
///
/// # Examples
///
/// ```
/// use bijbelquiz_refs::BookCatalog;
/// use bijbelquiz_refs::parsing::reference::parse_reference;
///
/// let catalog = BookCatalog::load_embedded().unwrap();
///
/// let parsed = parse_reference("Psalmen", &catalog).unwrap();
/// assert_eq!(parsed.chapter, 1);
///
/// assert!(parse_reference("   ", &catalog).is_none());
/// ```
#[must_use]
pub fn parse_reference(reference: &str, catalog: &BookCatalog) -> Option<ParsedReference> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if let Some((book, chapter)) = match_and_form(reference) {
        // Chapter 0 is no reference at all, not a book named "Genesis 0 en"
        return parse_positive(chapter).map(|chapter| ParsedReference::new(book, chapter));
    }

    let parts: Vec<&str> = reference.split(' ').collect();
    let (chapter_and_verses, book_parts) = parts.split_last()?;

    if book_parts.is_empty() {
        // Bare book name such as "Psalmen"
        return catalog
            .contains_name(&normalize_book_name(reference))
            .then(|| ParsedReference::new(reference, 1));
    }

    let book = book_parts.join(" ");
    let mut segments = chapter_and_verses.split(':');
    let chapter = segments.next().and_then(parse_positive)?;

    let (start_verse, end_verse) = match segments.next() {
        Some(verses) => parse_verses(verses),
        None => (None, None),
    };

    Some(ParsedReference::new(book, chapter).with_verses(start_verse, end_verse))
}

/// "Book chapter en chapter": book and chapter text of the first clause
fn match_and_form(reference: &str) -> Option<(&str, &str)> {
    let (first, second) = split_and_clause(reference)?;

    let captures = AND_FIRST_CLAUSE.captures(first)?;
    if !AND_SECOND_CLAUSE.is_match(second) {
        return None;
    }

    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Verse part after the colon: `4` or `1-3`. Unreadable numbers become absent.
fn parse_verses(verses: &str) -> (Option<u32>, Option<u32>) {
    if verses.contains('-') {
        let range: Vec<&str> = verses.split('-').collect();
        if let [start, end] = range.as_slice() {
            (parse_positive(start.trim()), parse_positive(end.trim()))
        } else {
            (None, None)
        }
    } else {
        (parse_positive(verses.trim()), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    fn parse(s: &str) -> Option<ParsedReference> {
        parse_reference(s, &catalog())
    }

    #[test]
    fn test_parse_verse_range() {
        assert_eq!(
            parse("Genesis 1:1-3"),
            Some(ParsedReference::new("Genesis", 1).with_verses(Some(1), Some(3)))
        );
    }

    #[test]
    fn test_parse_single_verse_and_chapter_only() {
        assert_eq!(
            parse("Johannes 3:16"),
            Some(ParsedReference::new("Johannes", 3).with_verses(Some(16), None))
        );
        assert_eq!(parse("Psalmen 23"), Some(ParsedReference::new("Psalmen", 23)));
    }

    #[test]
    fn test_parse_multi_word_book() {
        assert_eq!(
            parse("1 Samuël 17:4-10"),
            Some(ParsedReference::new("1 Samuël", 17).with_verses(Some(4), Some(10)))
        );
        assert_eq!(
            parse("Nieuwe testament 1"),
            Some(ParsedReference::new("Nieuwe testament", 1))
        );
    }

    #[test]
    fn test_parse_bare_book() {
        assert_eq!(parse("Psalmen"), Some(ParsedReference::new("Psalmen", 1)));
        assert_eq!(parse("  Openbaring "), Some(ParsedReference::new("Openbaring", 1)));
        assert_eq!(parse("Onbekend"), None);
    }

    #[test]
    fn test_bare_book_must_be_exact_table_key() {
        // Normalizes to "Joel", which is not itself a table key
        assert_eq!(parse("Joël"), None);
    }

    #[test]
    fn test_parse_and_form_drops_verses() {
        assert_eq!(parse("Genesis 2 en 3"), Some(ParsedReference::new("Genesis", 2)));
        assert_eq!(parse("Genesis 1:5 en 7"), Some(ParsedReference::new("Genesis", 1)));
    }

    #[test]
    fn test_and_form_falls_back_for_multi_word_books() {
        // The first clause only allows a one-word book, so the standard form applies
        assert_eq!(
            parse("1 Korinthe 2 en 3"),
            Some(ParsedReference::new("1 Korinthe 2 en", 3))
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_invalid_chapter() {
        assert_eq!(parse("Genesis een"), None);
        assert_eq!(parse("Genesis 0"), None);
        assert_eq!(parse("Genesis :1"), None);
    }

    #[test]
    fn test_non_numeric_verses_become_absent() {
        assert_eq!(
            parse("Genesis 1:a-3"),
            Some(ParsedReference::new("Genesis", 1).with_verses(None, Some(3)))
        );
        assert_eq!(
            parse("Genesis 1:1-2-3"),
            Some(ParsedReference::new("Genesis", 1))
        );
        assert_eq!(parse("Genesis 1:"), Some(ParsedReference::new("Genesis", 1)));
        assert_eq!(parse("Genesis 1:x"), Some(ParsedReference::new("Genesis", 1)));
    }

    #[test]
    fn test_split_and_clause() {
        assert_eq!(split_and_clause("Genesis 2 en 3"), Some(("Genesis 2", "3")));
        assert_eq!(split_and_clause("Genesis 2"), None);
        assert_eq!(
            split_and_clause("Genesis 2 en 3 en 4"),
            Some(("Genesis 2", "3 en 4"))
        );
    }

    #[test]
    fn test_and_form_splits_on_first_separator() {
        assert_eq!(
            parse("Genesis 1 en 2 en 3"),
            Some(ParsedReference::new("Genesis", 1))
        );
    }

    #[test]
    fn test_and_form_with_chapter_zero_is_no_match() {
        assert_eq!(parse("Genesis 0 en 3"), None);
    }
}
