//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the quiz/classification code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::io::source::DataSource;
use crate::report::StrategyTab;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "compass", version, about = "Customer-type quiz and sales-strategy explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (the default when no subcommand is given).
    Tui(DataArgs),
    /// Run the quiz as a plain line-based prompt and print the result.
    Quiz(DataArgs),
    /// Print customer-type cards.
    Types(TypesArgs),
    /// Classify an answer sequence directly (useful for scripting).
    Classify(ClassifyArgs),
    /// Print the sales-strategy guides.
    Strategies(StrategiesArgs),
}

/// Data-location options shared by every data-consuming command.
#[derive(Debug, Parser, Clone)]
pub struct DataArgs {
    /// Directory holding customer-types.json and quiz-questions.json.
    #[arg(long, default_value = "data", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Override the customer-type catalog source (path or http(s) URL).
    #[arg(long, value_name = "PATH|URL")]
    pub types: Option<String>,

    /// Override the question-bank source (path or http(s) URL).
    #[arg(long, value_name = "PATH|URL")]
    pub questions: Option<String>,

    /// Where the visited-section progress entry is kept.
    #[arg(long, default_value = ".compass-progress.json", value_name = "FILE")]
    pub progress_file: PathBuf,
}

impl DataArgs {
    /// Resolved catalog source: explicit override, else `<data-dir>/customer-types.json`.
    pub fn types_source(&self) -> DataSource {
        match &self.types {
            Some(raw) => DataSource::parse(raw),
            None => DataSource::file(self.data_dir.join("customer-types.json")),
        }
    }

    /// Resolved question-bank source: explicit override, else `<data-dir>/quiz-questions.json`.
    pub fn questions_source(&self) -> DataSource {
        match &self.questions {
            Some(raw) => DataSource::parse(raw),
            None => DataSource::file(self.data_dir.join("quiz-questions.json")),
        }
    }
}

/// Options for `compass types`.
#[derive(Debug, Parser)]
pub struct TypesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Show a single type's full card.
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

/// Options for `compass classify`.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Answer tags in quiz order (repeatable, or comma-separated).
    #[arg(short = 'a', long = "answers", value_delimiter = ',', required = true)]
    pub answers: Vec<String>,
}

/// Options for `compass strategies`.
#[derive(Debug, Parser)]
pub struct StrategiesArgs {
    /// Print one tab only; omit to print all four.
    #[arg(long, value_enum, value_name = "TAB")]
    pub tab: Option<StrategyTab>,
}

pub mod prompt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_args_default_to_the_data_dir_layout() {
        let args = DataArgs {
            data_dir: PathBuf::from("data"),
            types: None,
            questions: None,
            progress_file: PathBuf::from(".compass-progress.json"),
        };

        assert_eq!(args.types_source().describe(), "data/customer-types.json");
        assert_eq!(args.questions_source().describe(), "data/quiz-questions.json");
    }

    #[test]
    fn overrides_win_over_the_data_dir() {
        let args = DataArgs {
            data_dir: PathBuf::from("data"),
            types: Some("https://example.com/t.json".to_string()),
            questions: Some("elsewhere/q.json".to_string()),
            progress_file: PathBuf::from(".compass-progress.json"),
        };

        assert_eq!(args.types_source().describe(), "https://example.com/t.json");
        assert_eq!(args.questions_source().describe(), "elsewhere/q.json");
    }
}
