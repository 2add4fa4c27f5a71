use std::collections::BTreeMap;
use std::io::Cursor;

use langsheet::formats::CsvFormat;
use langsheet::traits::Parser;
use langsheet::types::{Document, FlattenedSet};
use langsheet::TranslationTable;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").expect("valid segment regex")
}

// No double quotes, so the quote-strip pass leaves values untouched.
fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?]{1,30}").expect("valid value regex")
}

fn document_strategy() -> impl Strategy<Value = Document> {
    let leaf = value_strategy().prop_map(Document::Leaf);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(segment_strategy(), inner, 1..4).prop_map(Document::Node)
    })
}

// Roots are always nodes, and every node is non-empty, so flattening loses
// nothing.
fn root_strategy() -> impl Strategy<Value = Document> {
    prop::collection::btree_map(segment_strategy(), document_strategy(), 1..5)
        .prop_map(Document::Node)
}

fn language_sets_strategy() -> impl Strategy<Value = BTreeMap<String, FlattenedSet>> {
    prop::collection::vec(root_strategy(), 1..4).prop_map(|documents| {
        let languages = ["en-US", "fr-FR", "de-DE"];
        documents
            .into_iter()
            .zip(languages)
            .map(|(document, language)| (language.to_string(), document.flatten()))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn flatten_unflatten_round_trip_preserves_document(document in root_strategy()) {
        let flattened = document.flatten();
        let rebuilt = Document::from_flattened(&flattened);
        prop_assert_eq!(rebuilt, document);
    }

    #[test]
    fn flattened_sets_survive_table_reconciliation(sets in language_sets_strategy()) {
        let table = TranslationTable::from_language_sets(&sets, "en-US");
        prop_assert_eq!(table.extract_languages(), sets);
    }

    #[test]
    fn flattened_sets_survive_csv_serialization(sets in language_sets_strategy()) {
        let table = TranslationTable::from_language_sets(&sets, "en-US");
        prop_assume!(!table.is_empty());

        let mut buffer = Vec::new();
        CsvFormat::from(table).to_writer(&mut buffer).expect("write csv");

        let reparsed = CsvFormat::from_reader(Cursor::new(buffer)).expect("reparse csv");
        prop_assert_eq!(reparsed.table.extract_languages(), sets);
    }

    #[test]
    fn unflatten_never_emits_empty_leaves(mut set in prop::collection::btree_map(
        segment_strategy(),
        value_strategy(),
        0..6,
    )) {
        set.insert("always.blank".to_string(), String::new());
        let document = Document::from_flattened(&set);
        let flattened = document.flatten();
        prop_assert!(!flattened.contains_key("always.blank"));
        prop_assert!(flattened.values().all(|value| !value.is_empty()));
    }
}
