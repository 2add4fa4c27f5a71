//! Core types for langsheet: the hierarchical document tree, validated
//! language codes, and the flatten/unflatten transforms between them and
//! dotted-path mappings.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::{error::Error, traits::Parser};

lazy_static! {
    static ref LANGUAGE_CODE_REGEX: Regex =
        Regex::new(r"^[a-z]{2}-[A-Z]{2}$").expect("valid language code regex");
}

/// Separator joining path segments in a translation key.
pub const KEY_SEPARATOR: &str = ".";

/// A single language's translations, keyed by dotted path.
///
/// Keys are unique and values are never empty: a missing translation is
/// represented by the absence of its key, not by an empty string.
pub type FlattenedSet = BTreeMap<String, String>;

/// A language code of the form `xx-YY` (e.g. `en-US`).
///
/// Construction goes through [`FromStr`], which enforces the `xx-YY` shape
/// and additionally checks that the code parses as a BCP 47 language
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse_language_identifier(&self) -> Option<LanguageIdentifier> {
        self.0.parse().ok()
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !LANGUAGE_CODE_REGEX.is_match(s) {
            return Err(Error::validation_error(format!(
                "language code `{}` does not match the xx-YY pattern",
                s
            )));
        }
        // The regex pins the shape; this rejects codes that are not valid
        // BCP 47 identifiers despite matching it.
        s.parse::<LanguageIdentifier>().map_err(|_| {
            Error::validation_error(format!(
                "language code `{}` is not a valid language identifier",
                s
            ))
        })?;
        Ok(LanguageCode(s.to_string()))
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One language's hierarchical translation document.
///
/// Leaves are translation strings; interior nodes map path segments to child
/// nodes. Arrays and mixed leaf/node values do not exist in this model, so a
/// dotted path addresses at most one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// A translation string.
    Leaf(String),
    /// A mapping from path segment to child.
    Node(BTreeMap<String, Document>),
}

impl Document {
    /// Flattens the document into a mapping from dotted path to translation
    /// string, using [`KEY_SEPARATOR`].
    ///
    /// Leaf values have a single pair of enclosing double quotes stripped,
    /// and leaves that end up empty are dropped entirely. A bare leaf at the
    /// root has no addressable path and flattens to nothing.
    pub fn flatten(&self) -> FlattenedSet {
        self.flatten_with_separator(KEY_SEPARATOR)
    }

    /// Flattens the document using a custom separator.
    pub fn flatten_with_separator(&self, separator: &str) -> FlattenedSet {
        let mut out = FlattenedSet::new();
        if let Document::Node(children) = self {
            for (segment, child) in children {
                collect_leaves(child, segment.clone(), separator, &mut out);
            }
        }
        out
    }

    /// Rebuilds a document from a flattened mapping, using [`KEY_SEPARATOR`].
    ///
    /// Pairs with an empty value are skipped entirely. When a shorter key is
    /// a prefix of a longer key's path, the later assignment wins: a leaf
    /// blocking an intermediate segment is replaced by a node, and a node
    /// sitting at a final segment is replaced by the leaf.
    pub fn from_flattened(set: &FlattenedSet) -> Self {
        Self::from_flattened_with_separator(set, KEY_SEPARATOR)
    }

    /// Rebuilds a document from a flattened mapping using a custom separator.
    pub fn from_flattened_with_separator(set: &FlattenedSet, separator: &str) -> Self {
        let mut root = BTreeMap::new();
        for (key, value) in set {
            if value.is_empty() {
                continue;
            }
            let segments: Vec<&str> = key.split(separator).collect();
            insert_leaf(&mut root, &segments, value);
        }
        Document::Node(root)
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = Error;

    /// Converts a parsed JSON value into a document tree.
    ///
    /// The root must be an object. Scalar leaves that are not strings
    /// (numbers, booleans) are coerced to their canonical string form;
    /// `null` values are treated as missing and dropped. Arrays are
    /// rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => node_from_map(map, ""),
            other => Err(Error::InvalidDocument(format!(
                "document root must be an object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<&Document> for serde_json::Value {
    fn from(document: &Document) -> Self {
        match document {
            Document::Leaf(value) => serde_json::Value::String(value.clone()),
            Document::Node(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(segment, child)| (segment.clone(), serde_json::Value::from(child)))
                    .collect(),
            ),
        }
    }
}

impl Parser for Document {
    /// Parse a JSON document from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_reader(reader).map_err(Error::Parse)?;
        Document::try_from(value)
    }

    /// Write the document as pretty-printed JSON: 2-space indentation,
    /// non-ASCII characters emitted literally, trailing newline.
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let value = serde_json::Value::from(self);
        serde_json::to_writer_pretty(&mut writer, &value).map_err(Error::Parse)?;
        writer.write_all(b"\n").map_err(Error::Io)?;
        Ok(())
    }
}

fn collect_leaves(document: &Document, path: String, separator: &str, out: &mut FlattenedSet) {
    match document {
        Document::Leaf(value) => {
            let value = strip_enclosing_quotes(value);
            if !value.is_empty() {
                out.insert(path, value.to_string());
            }
        }
        Document::Node(children) => {
            for (segment, child) in children {
                let child_path = format!("{}{}{}", path, separator, segment);
                collect_leaves(child, child_path, separator, out);
            }
        }
    }
}

fn insert_leaf(children: &mut BTreeMap<String, Document>, segments: &[&str], value: &str) {
    match segments {
        [] => {}
        [last] => {
            children.insert((*last).to_string(), Document::Leaf(value.to_string()));
        }
        [head, rest @ ..] => {
            let child = children
                .entry((*head).to_string())
                .or_insert_with(|| Document::Node(BTreeMap::new()));
            if let Document::Leaf(_) = child {
                // A shorter key already claimed this path; the longer key wins.
                *child = Document::Node(BTreeMap::new());
            }
            if let Document::Node(grandchildren) = child {
                insert_leaf(grandchildren, rest, value);
            }
        }
    }
}

fn node_from_map(map: serde_json::Map<String, serde_json::Value>, path: &str) -> Result<Document, Error> {
    let mut children = BTreeMap::new();
    for (segment, value) in map {
        let child_path = if path.is_empty() {
            segment.clone()
        } else {
            format!("{}{}{}", path, KEY_SEPARATOR, segment)
        };
        match value {
            serde_json::Value::Object(child) => {
                children.insert(segment, node_from_map(child, &child_path)?);
            }
            serde_json::Value::String(s) => {
                children.insert(segment, Document::Leaf(s));
            }
            serde_json::Value::Number(n) => {
                children.insert(segment, Document::Leaf(n.to_string()));
            }
            serde_json::Value::Bool(b) => {
                children.insert(segment, Document::Leaf(b.to_string()));
            }
            serde_json::Value::Null => {}
            serde_json::Value::Array(_) => {
                return Err(Error::InvalidDocument(format!(
                    "array value at `{}` is not supported",
                    child_path
                )));
            }
        }
    }
    Ok(Document::Node(children))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// Strip one pair of enclosing literal double quotes. One layer only, and only
// when both ends carry a quote.
fn strip_enclosing_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
