//! Support for the CSV translation table format.
//!
//! The first column holds the translation key, the remaining header columns
//! are language codes, and a blank cell means the key is absent for that
//! language.

use std::io::BufRead;

use crate::{
    error::Error,
    formats::{read_table, write_table},
    table::TranslationTable,
    traits::Parser,
};

/// A translation table read from or written as CSV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub table: TranslationTable,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Ok(Format {
            table: read_table(reader, b',')?,
        })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        write_table(&self.table, writer, b',')
    }
}

impl From<TranslationTable> for Format {
    fn from(table: TranslationTable) -> Self {
        Format { table }
    }
}

impl From<Format> for TranslationTable {
    fn from(format: Format) -> Self {
        format.table
    }
}
