//! The `split` subcommand: one table file → per-language JSON documents.

use langsheet::{SplitOptions, table_to_documents};

use crate::helper::{parse_format, parse_language_codes};

/// Runs the split command, returning the process exit code.
pub fn run_split_command(
    input: String,
    output: String,
    languages: Option<Vec<String>>,
    format: Option<String>,
) -> i32 {
    let languages = match languages.as_deref().map(parse_language_codes).transpose() {
        Ok(languages) => languages,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let format = match parse_format(format.as_deref()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let options = SplitOptions { languages, format };

    match table_to_documents(&input, &output, &options) {
        Ok(report) => {
            for skip in &report.skipped {
                eprintln!("Warning: skipped {}", skip);
            }
            if report.files_written == 0 {
                if report.skipped.is_empty() {
                    eprintln!("No translations found in {}", input);
                } else {
                    eprintln!("Error: no documents written to {}", output);
                }
                return 1;
            }
            println!(
                "Split {} into {} documents ({} keys) under {}",
                input, report.files_written, report.keys, output
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
