use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::BookNumber;
use crate::utils::normalize::normalize_book_name;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// A canonical book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub number: u8,
    pub name: String,
}

/// A deprecated spelling and the name that replaces it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub canonical: String,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default)]
    pub language: Option<String>,
    pub books: Vec<BookEntry>,
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
}

/// The book name tables with lookup indexes
#[derive(Debug, Default)]
pub struct BookCatalog {
    /// Canonical books in canonical order
    pub books: Vec<BookEntry>,

    /// Aliases in table order; case-insensitive lookup scans in this order
    pub aliases: Vec<AliasEntry>,

    /// Index: canonical name -> book number
    name_to_number: HashMap<String, BookNumber>,

    /// Index: normalized canonical name -> book number
    normalized_to_number: HashMap<String, BookNumber>,

    /// Index: alias -> position in `aliases`
    alias_to_index: HashMap<String, usize>,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/dutch_books.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for book in data.books {
            catalog.add_book(book)?;
        }
        for alias in data.aliases {
            catalog.add_alias(alias);
        }

        tracing::debug!(
            books = catalog.books.len(),
            aliases = catalog.aliases.len(),
            "Loaded book catalog"
        );

        Ok(catalog)
    }

    /// Add a canonical book
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` if the number is outside 1-67 or the name or
    /// number is already present.
    pub fn add_book(&mut self, book: BookEntry) -> Result<(), CatalogError> {
        let number = BookNumber::new(book.number).ok_or_else(|| {
            CatalogError::Invalid(format!(
                "Book '{}' has number {}, expected {}-{}",
                book.name,
                book.number,
                BookNumber::FIRST,
                BookNumber::LAST
            ))
        })?;

        if self.name_to_number.contains_key(&book.name) {
            return Err(CatalogError::Invalid(format!(
                "Duplicate book name '{}'",
                book.name
            )));
        }
        if self.books.iter().any(|b| b.number == book.number) {
            return Err(CatalogError::Invalid(format!(
                "Duplicate book number {}",
                book.number
            )));
        }

        self.name_to_number.insert(book.name.clone(), number);
        self.normalized_to_number
            .entry(normalize_book_name(&book.name))
            .or_insert(number);
        self.books.push(book);
        Ok(())
    }

    /// Add an alias. A repeated alias keeps its first mapping.
    pub fn add_alias(&mut self, alias: AliasEntry) {
        if self.alias_to_index.contains_key(&alias.alias) {
            tracing::warn!("Ignoring duplicate alias '{}'", alias.alias);
            return;
        }
        self.alias_to_index
            .insert(alias.alias.clone(), self.aliases.len());
        self.aliases.push(alias);
    }

    /// Ordinal of a canonical name, matched exactly
    pub fn number_of(&self, name: &str) -> Option<BookNumber> {
        self.name_to_number.get(name).copied()
    }

    /// Ordinal of the canonical book whose normalized name equals `normalized`
    pub fn number_of_normalized(&self, normalized: &str) -> Option<BookNumber> {
        self.normalized_to_number.get(normalized).copied()
    }

    /// Whether `name` is exactly a canonical name
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_number.contains_key(name)
    }

    /// Canonical entry for a book number
    pub fn book(&self, number: BookNumber) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.number == number.0)
    }

    /// Replacement for an alias, matched exactly
    pub fn canonical_for_alias(&self, alias: &str) -> Option<&str> {
        self.alias_to_index
            .get(alias)
            .map(|&idx| self.aliases[idx].canonical.as_str())
    }

    /// Replacement for an alias, matched exactly first and then case-insensitively in
    /// table order
    pub fn canonical_for_alias_ignore_case(&self, name: &str) -> Option<&str> {
        if let Some(canonical) = self.canonical_for_alias(name) {
            return Some(canonical);
        }

        let lowered = name.to_lowercase();
        self.aliases
            .iter()
            .find(|a| a.alias.to_lowercase() == lowered)
            .map(|a| a.canonical.as_str())
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            language: Some("nl".to_string()),
            books: self.books.clone(),
            aliases: self.aliases.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of canonical books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
