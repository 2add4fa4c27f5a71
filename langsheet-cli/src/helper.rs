//! Small shared helpers for turning raw CLI arguments into library options.

use std::str::FromStr;

use langsheet::{Error, FormatType, LanguageCode};

/// Parses a user-supplied allow-list into validated language codes.
///
/// Unlike codes discovered in input files, a bad code here is the user's
/// typo and fails the whole command.
pub fn parse_language_codes(raw: &[String]) -> Result<Vec<LanguageCode>, Error> {
    raw.iter().map(|code| code.parse()).collect()
}

/// Parses an explicit table format name, if one was given.
pub fn parse_format(raw: Option<&str>) -> Result<Option<FormatType>, Error> {
    raw.map(FormatType::from_str).transpose()
}
