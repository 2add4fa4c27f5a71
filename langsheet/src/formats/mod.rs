//! Supported tabular file formats for langsheet.
//!
//! This module re-exports the per-format `Format` wrappers and provides the
//! [`FormatType`] enum for generic format handling across the crate. Both
//! formats share one delimiter-parameterized reader/writer.

pub mod csv;
pub mod tsv;

use std::{
    fmt::{Display, Formatter},
    io::BufRead,
    path::Path,
    str::FromStr,
};

pub use csv::Format as CsvFormat;
pub use tsv::Format as TsvFormat;

use crate::{
    Error,
    table::{KEY_COLUMN_LABEL, TableRow, TranslationTable},
    traits::Parser,
};

/// Represents all supported tabular formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Csv => write!(f, "csv"),
            FormatType::Tsv => write!(f, "tsv"),
        }
    }
}

/// Accepts the case-insensitive strings `"csv"` and `"tsv"`.
///
/// Returns [`crate::error::Error::UnknownFormat`] for anything else.
///
/// # Example
/// ```rust
/// use langsheet::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("csv").unwrap(), FormatType::Csv);
/// assert_eq!(FormatType::from_str("TSV").unwrap(), FormatType::Tsv);
/// assert!(FormatType::from_str("xlsx").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "csv" => Ok(FormatType::Csv),
            "tsv" => Ok(FormatType::Tsv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Csv => "csv",
            FormatType::Tsv => "tsv",
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            FormatType::Csv => b',',
            FormatType::Tsv => b'\t',
        }
    }

    /// Reads a translation table from a file in this format.
    pub fn read_table<P: AsRef<Path>>(&self, path: P) -> Result<TranslationTable, Error> {
        match self {
            FormatType::Csv => Ok(CsvFormat::read_from(path)?.table),
            FormatType::Tsv => Ok(TsvFormat::read_from(path)?.table),
        }
    }

    /// Writes a translation table to a file in this format.
    pub fn write_table<P: AsRef<Path>>(
        &self,
        table: &TranslationTable,
        path: P,
    ) -> Result<(), Error> {
        match self {
            FormatType::Csv => CsvFormat::from(table.clone()).write_to(path),
            FormatType::Tsv => TsvFormat::from(table.clone()).write_to(path),
        }
    }
}

/// Infers a [`FormatType`] from a file path's extension.
///
/// Returns `Some(FormatType)` if the extension matches a known format,
/// otherwise `None`.
///
/// # Example
/// ```rust
/// use langsheet::formats::{FormatType, infer_format_from_extension};
/// assert_eq!(infer_format_from_extension("foo.csv"), Some(FormatType::Csv));
/// assert_eq!(infer_format_from_extension("foo.tsv"), Some(FormatType::Tsv));
/// assert_eq!(infer_format_from_extension("foo.xlsx"), None);
/// ```
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some("csv") => Some(FormatType::Csv),
        Some("tsv") => Some(FormatType::Tsv),
        _ => None,
    }
}

/// Reads a table with the given delimiter.
///
/// The first record is the header: an index column label followed by the
/// language codes. Short data rows are padded with empty cells to the header
/// width and long rows are truncated to it. Rows that are entirely blank are
/// skipped.
pub(crate) fn read_table<R: BufRead>(reader: R, delimiter: u8) -> Result<TranslationTable, Error> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(header) => header.map_err(Error::CsvParse)?,
        None => return Err(Error::InvalidTable("empty table".to_string())),
    };

    let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    let width = languages.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(Error::CsvParse)?;
        let mut fields = record.iter();
        let key = fields.next().unwrap_or_default().to_string();
        let mut cells: Vec<String> = fields.map(str::to_string).collect();
        if key.is_empty() && cells.iter().all(String::is_empty) {
            continue;
        }
        cells.resize(width, String::new());
        rows.push(TableRow { key, cells });
    }

    Ok(TranslationTable { languages, rows })
}

/// Writes a table with the given delimiter, labeling the index column
/// [`KEY_COLUMN_LABEL`].
pub(crate) fn write_table<W: std::io::Write>(
    table: &TranslationTable,
    writer: W,
    delimiter: u8,
) -> Result<(), Error> {
    let mut wtr = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header = Vec::with_capacity(table.languages.len() + 1);
    header.push(KEY_COLUMN_LABEL.to_string());
    header.extend(table.languages.iter().cloned());
    wtr.write_record(&header).map_err(Error::CsvParse)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(table.languages.len() + 1);
        record.push(row.key.clone());
        record.extend(row.cells.iter().cloned());
        wtr.write_record(&record).map_err(Error::CsvParse)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}
