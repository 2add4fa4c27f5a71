//! The `merge` subcommand: per-language JSON documents → one table file.

use langsheet::{MergeOptions, documents_to_table};

use crate::helper::{parse_format, parse_language_codes};

/// Runs the merge command, returning the process exit code.
pub fn run_merge_command(
    input: String,
    output: String,
    priority_language: String,
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

    let options = MergeOptions {
        priority_language: Some(priority_language),
        languages,
        format,
    };

    match documents_to_table(&input, &output, &options) {
        Ok(report) => {
            for skip in &report.skipped {
                eprintln!("Warning: skipped {}", skip);
            }
            if report.files_written == 0 {
                if report.keys == 0 {
                    eprintln!("No translations found in {}", input);
                } else {
                    eprintln!("Error: no output written to {}", output);
                }
                return 1;
            }
            println!(
                "Merged {} languages ({} keys) into {}",
                report.languages, report.keys, output
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
