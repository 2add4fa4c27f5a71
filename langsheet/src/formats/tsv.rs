//! Support for the TSV translation table format.
//!
//! Identical layout to the CSV format with a tab delimiter: key column
//! first, one language column per header code, blank cell = absent.

use std::io::BufRead;

use crate::{
    error::Error,
    formats::{read_table, write_table},
    table::TranslationTable,
    traits::Parser,
};

/// A translation table read from or written as TSV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub table: TranslationTable,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Ok(Format {
            table: read_table(reader, b'\t')?,
        })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        write_table(&self.table, writer, b'\t')
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
