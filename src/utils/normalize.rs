//! Book name normalization used to build lookup keys.

use once_cell::sync::Lazy;
use regex::Regex;

/// Accented characters that fold to a plain base letter.
///
/// Only the lowercase forms appearing in Dutch book names are folded; uppercase accented
/// letters are word characters and are kept as they are.
pub const DIACRITIC_FOLDS: &[(char, char)] = &[
    ('ë', 'e'),
    ('ï', 'i'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('â', 'a'),
    ('ô', 'o'),
    ('û', 'u'),
    ('î', 'i'),
    ('ä', 'a'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('ÿ', 'y'),
    ('ç', 'c'),
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

fn fold_diacritic(c: char) -> char {
    DIACRITIC_FOLDS
        .iter()
        .find(|(accented, _)| *accented == c)
        .map_or(c, |&(_, base)| base)
}

/// Normalize a book name into a lookup key.
///
/// Trims surrounding whitespace, folds the characters of [`DIACRITIC_FOLDS`] to their
/// base letter and drops everything that is neither a word character nor whitespace.
///
/// # Examples
///
/// ```
/// use bijbelquiz_refs::utils::normalize::normalize_book_name;
///
/// assert_eq!(normalize_book_name(" 1 Samuël "), "1 Samuel");
/// assert_eq!(normalize_book_name("Mattheüs."), "Mattheus");
/// ```
#[must_use]
pub fn normalize_book_name(book_name: &str) -> String {
    let folded: String = book_name.trim().chars().map(fold_diacritic).collect();
    NON_WORD.replace_all(&folded, "").trim().to_string()
}
