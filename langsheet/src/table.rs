//! The key×language translation table and its reconciliation logic.
//!
//! Building a table merges heterogeneous per-language key sets into one
//! rectangular grid; extraction is the inverse, recovering one flattened set
//! per language column.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::FlattenedSet;

/// Language column pinned first in tabular output unless overridden.
pub const DEFAULT_PRIORITY_LANGUAGE: &str = "en-US";

/// Label of the index column in tabular output.
pub const KEY_COLUMN_LABEL: &str = "Key";

/// A rectangular translation table: one row per key, one column per
/// language.
///
/// Rows are sorted lexicographically by key. Column headers are kept as raw
/// strings; the `xx-YY` validation is applied at the document-writing
/// boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    /// Language codes in column order.
    pub languages: Vec<String>,

    /// Rows in key order. Every row has exactly `languages.len()` cells.
    pub rows: Vec<TableRow>,
}

/// One table row: a translation key plus one cell per language column.
///
/// An empty cell means the key is absent for that language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

impl TranslationTable {
    /// Merges per-language flattened sets into one table.
    ///
    /// Row order is the lexicographically sorted union of all keys. Column
    /// order is the priority language first (if present among the inputs),
    /// then the remaining codes sorted ascending; an absent priority
    /// language is simply omitted. A key missing for a language yields an
    /// empty cell, never an error.
    pub fn from_language_sets(
        sets: &BTreeMap<String, FlattenedSet>,
        priority_language: &str,
    ) -> Self {
        let languages = order_columns(sets.keys(), priority_language);

        let keys: BTreeSet<&String> = sets.values().flat_map(FlattenedSet::keys).collect();

        let rows = keys
            .into_iter()
            .map(|key| {
                let cells = languages
                    .iter()
                    .map(|language| {
                        sets.get(language)
                            .and_then(|set| set.get(key))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect();
                TableRow {
                    key: key.clone(),
                    cells,
                }
            })
            .collect();

        TranslationTable { languages, rows }
    }

    /// Recovers one flattened set per language column.
    ///
    /// Rows with an empty cell contribute no entry for that language, so the
    /// extracted sets carry the "absence, not empty string" invariant.
    pub fn extract_languages(&self) -> BTreeMap<String, FlattenedSet> {
        let mut out = BTreeMap::new();
        for (index, language) in self.languages.iter().enumerate() {
            let mut set = FlattenedSet::new();
            for row in &self.rows {
                if let Some(cell) = row.cells.get(index) {
                    if !cell.is_empty() {
                        set.insert(row.key.clone(), cell.clone());
                    }
                }
            }
            out.insert(language.clone(), set);
        }
        out
    }

    /// Total number of non-empty cells.
    pub fn translation_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|cell| !cell.is_empty()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn order_columns<'a>(
    languages: impl Iterator<Item = &'a String>,
    priority_language: &str,
) -> Vec<String> {
    let mut has_priority = false;
    let mut rest: Vec<String> = Vec::new();
    for language in languages {
        if language == priority_language {
            has_priority = true;
        } else {
            rest.push(language.clone());
        }
    }
    rest.sort();

    let mut out = Vec::with_capacity(rest.len() + usize::from(has_priority));
    if has_priority {
        out.push(priority_language.to_string());
    }
    out.extend(rest);
    out
}
