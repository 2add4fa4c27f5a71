#![forbid(unsafe_code)]
//! Translation spreadsheet toolkit for Rust.
//!
//! Converts between a key×language translation table (CSV or TSV) and one
//! nested JSON document per language, keyed by dotted paths like
//! `common.i18n.title`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langsheet::{MergeOptions, SplitOptions, documents_to_table, table_to_documents};
//!
//! // Merge a directory of en-US.json, fr-FR.json, ... into one table.
//! let report = documents_to_table("locales/", "translations.csv", &MergeOptions::default())?;
//! eprintln!("{} languages, {} keys", report.languages, report.keys);
//!
//! // And split a table back into per-language documents.
//! table_to_documents("translations.csv", "locales/", &SplitOptions::default())?;
//! # Ok::<(), langsheet::Error>(())
//! ```
//!
//! # Data model
//!
//! - A **document** is a tree whose leaves are translation strings and whose
//!   interior nodes map path segments to children ([`Document`]).
//! - **Flattening** joins the segments from root to leaf with `.` to form a
//!   translation key; **unflattening** rebuilds the tree ([`FlattenedSet`]).
//! - A **table** holds the lexicographically sorted union of all keys as
//!   rows and one column per language, the priority language pinned first
//!   ([`TranslationTable`]). A blank cell means the key is absent for that
//!   language.
//!
//! Per-unit problems (a malformed document, a language code that is not
//! `xx-YY`, an unwritable output file) never abort a run; they are skipped
//! and reported through [`ConvertReport`].

pub mod codec;
pub mod error;
pub mod formats;
pub mod table;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{
        ConvertReport, MergeOptions, Skip, SkipKind, SplitOptions, documents_to_table,
        load_language_sets, table_to_documents, write_language_documents,
    },
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    table::{DEFAULT_PRIORITY_LANGUAGE, KEY_COLUMN_LABEL, TableRow, TranslationTable},
    types::{Document, FlattenedSet, KEY_SEPARATOR, LanguageCode},
};
