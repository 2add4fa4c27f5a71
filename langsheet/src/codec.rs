//! The two conversion pipelines and their per-unit skip policy.
//!
//! Each direction is a single pass: load every input unit, reconcile, write
//! every output unit. A unit that fails (unparseable document, invalid
//! language code, unwritable output file) is skipped and recorded in the
//! [`ConvertReport`]; only whole-pipeline preconditions (a missing source
//! file or directory) escalate as an [`Error`].

use std::{collections::BTreeMap, fmt::Display, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    table::{DEFAULT_PRIORITY_LANGUAGE, TranslationTable},
    traits::Parser,
    types::{Document, FlattenedSet, LanguageCode},
};

/// File extension of per-language hierarchical documents.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Why a unit was skipped during a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    InvalidLanguageCode,
    ParseFailure,
    EmptyDocument,
    WriteFailure,
}

impl SkipKind {
    fn as_str(self) -> &'static str {
        match self {
            SkipKind::InvalidLanguageCode => "invalid language code",
            SkipKind::ParseFailure => "parse failure",
            SkipKind::EmptyDocument => "empty document",
            SkipKind::WriteFailure => "write failure",
        }
    }
}

/// One skipped unit: the file or language it names, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
    pub kind: SkipKind,
    pub unit: String,
    pub detail: String,
}

impl Skip {
    fn new(kind: SkipKind, unit: impl Into<String>, detail: impl Display) -> Self {
        Skip {
            kind,
            unit: unit.into(),
            detail: detail.to_string(),
        }
    }
}

impl Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`: {}", self.kind.as_str(), self.unit, self.detail)
    }
}

/// Outcome of one conversion run: counters plus the skipped units.
///
/// `files_written == 0` with no escalated error means the run discovered zero
/// translations (or could not write its only output); nothing was produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertReport {
    pub languages: usize,
    pub keys: usize,
    pub files_written: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<Skip>,
}

/// Options for the documents → table direction.
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Language column pinned first; [`DEFAULT_PRIORITY_LANGUAGE`] when
    /// `None`.
    pub priority_language: Option<String>,

    /// Only load these language codes; all valid codes when `None`.
    pub languages: Option<Vec<LanguageCode>>,

    /// Table format; inferred from the output extension when `None`.
    pub format: Option<FormatType>,
}

/// Options for the table → documents direction.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Only write these language codes; all valid codes when `None`.
    pub languages: Option<Vec<LanguageCode>>,

    /// Table format; inferred from the input extension when `None`.
    pub format: Option<FormatType>,
}

/// Loads per-language flattened sets from a directory of `xx-YY.json`
/// documents.
///
/// The directory is scanned non-recursively. `.json` files whose stem is not
/// a valid language code are skipped with a diagnostic; files with other
/// extensions are ignored. A document that parses but contains no
/// translations still contributes its (empty) language column, with an
/// [`SkipKind::EmptyDocument`] diagnostic.
pub fn load_language_sets<P: AsRef<Path>>(
    input_dir: P,
    allow: Option<&[LanguageCode]>,
) -> Result<(BTreeMap<String, FlattenedSet>, Vec<Skip>), Error> {
    let input_dir = input_dir.as_ref();
    if !input_dir.is_dir() {
        return Err(Error::NotFound(input_dir.display().to_string()));
    }

    let mut sets = BTreeMap::new();
    let mut skipped = Vec::new();

    for entry in fs::read_dir(input_dir).map_err(Error::Io)? {
        let entry = entry.map_err(Error::Io)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some(DOCUMENT_EXTENSION) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let code: LanguageCode = match stem.parse() {
            Ok(code) => code,
            Err(err) => {
                skipped.push(Skip::new(SkipKind::InvalidLanguageCode, &file_name, err));
                continue;
            }
        };
        if let Some(allow) = allow {
            if !allow.contains(&code) {
                continue;
            }
        }

        let document = match Document::read_from(&path) {
            Ok(document) => document,
            Err(err) => {
                skipped.push(Skip::new(SkipKind::ParseFailure, &file_name, err));
                continue;
            }
        };

        let set = document.flatten();
        if set.is_empty() {
            skipped.push(Skip::new(
                SkipKind::EmptyDocument,
                &file_name,
                "no translations found",
            ));
        }
        sets.insert(code.to_string(), set);
    }

    Ok((sets, skipped))
}

/// Writes one `<lang>.json` document per valid language in `sets`, creating
/// `output_dir` if needed.
///
/// Languages failing the `xx-YY` pattern are skipped with a diagnostic, as
/// are individual files that cannot be written; neither aborts the loop.
pub fn write_language_documents<P: AsRef<Path>>(
    sets: &BTreeMap<String, FlattenedSet>,
    output_dir: P,
    allow: Option<&[LanguageCode]>,
) -> Result<(usize, Vec<Skip>), Error> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(Error::Io)?;

    let mut written = 0;
    let mut skipped = Vec::new();

    for (language, set) in sets {
        let code: LanguageCode = match language.parse() {
            Ok(code) => code,
            Err(err) => {
                skipped.push(Skip::new(SkipKind::InvalidLanguageCode, language, err));
                continue;
            }
        };
        if let Some(allow) = allow {
            if !allow.contains(&code) {
                continue;
            }
        }

        let document = Document::from_flattened(set);
        let path = output_dir.join(format!("{}.{}", code, DOCUMENT_EXTENSION));
        match document.write_to(&path) {
            Ok(()) => written += 1,
            Err(err) => {
                skipped.push(Skip::new(
                    SkipKind::WriteFailure,
                    path.display().to_string(),
                    err,
                ));
            }
        }
    }

    Ok((written, skipped))
}

/// Merges a directory of per-language documents into one translation table
/// file.
///
/// Discovering zero translations across all valid inputs is not an error:
/// the run returns its report with nothing written.
pub fn documents_to_table<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output: Q,
    options: &MergeOptions,
) -> Result<ConvertReport, Error> {
    let (sets, skipped) = load_language_sets(&input_dir, options.languages.as_deref())?;

    let mut report = ConvertReport {
        languages: sets.len(),
        skipped,
        ..ConvertReport::default()
    };

    let priority_language = options
        .priority_language
        .as_deref()
        .unwrap_or(DEFAULT_PRIORITY_LANGUAGE);
    let table = TranslationTable::from_language_sets(&sets, priority_language);
    report.keys = table.rows.len();

    if table.is_empty() {
        return Ok(report);
    }

    let format = resolve_format(options.format, output.as_ref())?;
    match format.write_table(&table, &output) {
        Ok(()) => report.files_written = 1,
        Err(err) => {
            report.skipped.push(Skip::new(
                SkipKind::WriteFailure,
                output.as_ref().display().to_string(),
                err,
            ));
        }
    }

    Ok(report)
}

/// Splits one translation table file into per-language documents under
/// `output_dir`.
///
/// A table with zero non-empty cells produces no output at all (the output
/// directory is not even created); the report records what was seen.
pub fn table_to_documents<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    options: &SplitOptions,
) -> Result<ConvertReport, Error> {
    let input = input.as_ref();
    if !input.is_file() {
        return Err(Error::NotFound(input.display().to_string()));
    }

    let format = resolve_format(options.format, input)?;
    let table = format.read_table(input)?;

    let mut report = ConvertReport {
        languages: table.languages.len(),
        keys: table.rows.len(),
        ..ConvertReport::default()
    };

    if table.translation_count() == 0 {
        return Ok(report);
    }

    let sets = table.extract_languages();
    let (written, skipped) =
        write_language_documents(&sets, output_dir, options.languages.as_deref())?;
    report.files_written = written;
    report.skipped.extend(skipped);

    Ok(report)
}

fn resolve_format(explicit: Option<FormatType>, path: &Path) -> Result<FormatType, Error> {
    match explicit {
        Some(format) => Ok(format),
        None => infer_format_from_extension(path).ok_or_else(|| {
            Error::UnknownFormat(format!(
                "cannot infer table format from `{}`; expected a .csv or .tsv path",
                path.display()
            ))
        }),
    }
}
