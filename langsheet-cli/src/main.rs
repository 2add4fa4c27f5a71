mod helper;
mod merge;
mod split;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "langsheet", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge per-language JSON documents into one translation table.
    Merge {
        /// Directory containing <lang>.json documents
        #[arg(short, long)]
        input: String,

        /// Table file to write (.csv or .tsv)
        #[arg(short, long)]
        output: String,

        /// Language column pinned first in the table
        #[arg(short, long, default_value = langsheet::DEFAULT_PRIORITY_LANGUAGE)]
        priority_language: String,

        /// Comma-separated language codes to include (all valid codes if omitted)
        #[arg(short, long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Table format (csv or tsv), inferred from the output path if omitted
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Split a translation table into per-language JSON documents.
    Split {
        /// Table file to read (.csv or .tsv)
        #[arg(short, long)]
        input: String,

        /// Directory to write <lang>.json documents to
        #[arg(short, long)]
        output: String,

        /// Comma-separated language codes to write (all valid codes if omitted)
        #[arg(short, long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Table format (csv or tsv), inferred from the input path if omitted
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let args = Args::parse();

    let code = match args.commands {
        Commands::Merge {
            input,
            output,
            priority_language,
            languages,
            format,
        } => merge::run_merge_command(input, output, priority_language, languages, format),
        Commands::Split {
            input,
            output,
            languages,
            format,
        } => split::run_split_command(input, output, languages, format),
        Commands::Completions { shell } => {
            let mut command = Args::command();
            clap_complete::generate(shell, &mut command, "langsheet", &mut std::io::stdout());
            0
        }
    };

    std::process::exit(code);
}
