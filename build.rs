use std::collections::HashSet;
use std::path::Path;

/// Number of entries in the canonical book table
const BOOK_COUNT: u64 = 67;

fn main() {
    let catalog_path = Path::new("catalogs/dutch_books.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the book catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n"
    );

    let books = catalog
        .get("books")
        .and_then(|b| b.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'books' array\n\
                 The catalog must have a top-level 'books' array.\n"
            );
        });

    let aliases = catalog
        .get("aliases")
        .and_then(|a| a.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'aliases' array\n\
                 The catalog must have a top-level 'aliases' array.\n"
            );
        });

    validate_books(books);
    validate_aliases(aliases);

    println!(
        "cargo:warning=Validated book catalog: {} books, {} aliases",
        books.len(),
        aliases.len()
    );
}

fn validate_books(books: &[serde_json::Value]) {
    assert!(
        books.len() as u64 == BOOK_COUNT,
        "\n\nCATALOG BUILD ERROR: Expected {BOOK_COUNT} books, found {}\n",
        books.len()
    );

    let mut names = HashSet::new();
    let mut numbers = HashSet::new();

    for (i, book) in books.iter().enumerate() {
        let name = book
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Book at index {i} missing 'name' field\n")
            });

        let number = book
            .get("number")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Book '{name}' (index {i}) missing 'number' field\n")
            });

        assert!(
            (1..=BOOK_COUNT).contains(&number),
            "\n\nCATALOG BUILD ERROR: Book '{name}' has number {number}, expected 1..={BOOK_COUNT}\n"
        );
        assert!(
            names.insert(name.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate book name '{name}'\n"
        );
        assert!(
            numbers.insert(number),
            "\n\nCATALOG BUILD ERROR: Duplicate book number {number} ('{name}')\n"
        );
    }
}

fn validate_aliases(aliases: &[serde_json::Value]) {
    for (i, entry) in aliases.iter().enumerate() {
        let alias = entry.get("alias").and_then(|v| v.as_str());
        let canonical = entry.get("canonical").and_then(|v| v.as_str());

        match (alias, canonical) {
            (Some(alias), Some(canonical)) => {
                assert!(
                    !alias.trim().is_empty() && !canonical.trim().is_empty(),
                    "\n\nCATALOG BUILD ERROR: Alias at index {i} has an empty name\n"
                );
            }
            _ => panic!(
                "\n\nCATALOG BUILD ERROR: Alias at index {i} needs 'alias' and 'canonical' fields\n"
            ),
        }
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/dutch_books.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
