//! Book name catalog: the canonical Dutch book names and their deprecated spellings.
//!
//! The catalog holds two immutable tables:
//!
//! - **Books**: canonical name -> ordinal (1-67), e.g. `1 Samuël` -> 9
//! - **Aliases**: deprecated spelling -> canonical spelling, e.g. `Ester` -> `Esther`
//!
//! An embedded catalog is compiled into the binary and validated by `build.rs`. A custom
//! catalog with the same layout can be loaded from a JSON file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bijbelquiz_refs::BookCatalog;
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//!
//! assert_eq!(catalog.number_of("Esther").map(|n| n.0), Some(17));
//! assert_eq!(catalog.canonical_for_alias("Ester"), Some("Esther"));
//! ```

pub mod store;
