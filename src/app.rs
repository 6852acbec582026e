//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - loads the two data documents
//! - dispatches to the TUI, the prompt quiz, or the one-shot print commands

use clap::Parser;

use crate::cli::{Cli, ClassifyArgs, Command, DataArgs, StrategiesArgs, TypesArgs};
use crate::error::AppError;
use crate::quiz::classify;
use crate::report;

pub mod startup;

use startup::DataSources;

/// Entry point for the `compass` binary.
pub fn run() -> Result<(), AppError> {
    // Diagnostics go to stderr via the standard RUST_LOG machinery; default
    // to warnings so load problems surface without drowning normal output.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // We want bare `compass` (and `compass --data-dir X`) to behave like
    // `compass tui ...`. Clap requires a subcommand name, so we do a small,
    // explicit rewrite of the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => crate::tui::run(&args),
        Command::Quiz(args) => handle_quiz(&args),
        Command::Types(args) => handle_types(&args),
        Command::Classify(args) => handle_classify(&args),
        Command::Strategies(args) => handle_strategies(&args),
    }
}

/// Resolve the data-document sources from CLI flags.
pub fn data_sources(args: &DataArgs) -> DataSources {
    DataSources {
        types: args.types_source(),
        questions: args.questions_source(),
    }
}

fn handle_quiz(args: &DataArgs) -> Result<(), AppError> {
    let data = startup::load_all(&data_sources(args));
    crate::cli::prompt::run_quiz_prompt(&data)
}

fn handle_types(args: &TypesArgs) -> Result<(), AppError> {
    let catalog = startup::load_catalog(&args.data.types_source())?;
    if catalog.is_empty() {
        return Err(AppError::new(3, "The customer-type catalog is empty."));
    }

    match &args.id {
        Some(id) => {
            let t = catalog.get(id).ok_or_else(|| {
                let known: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
                AppError::new(
                    2,
                    format!("Unknown type id '{id}'. Known ids: {}.", known.join(", ")),
                )
            })?;
            println!("{}", report::format_type_card(t));
        }
        None => println!("{}", report::format_catalog(&catalog)),
    }

    Ok(())
}

fn handle_classify(args: &ClassifyArgs) -> Result<(), AppError> {
    let catalog = startup::load_catalog(&args.data.types_source())?;
    if catalog.is_empty() {
        return Err(AppError::new(3, "The customer-type catalog is empty."));
    }

    let result = classify(&args.answers, &catalog).map_err(|e| AppError::new(2, e.to_string()))?;
    println!("{}", report::format_result(&result));
    Ok(())
}

fn handle_strategies(args: &StrategiesArgs) -> Result<(), AppError> {
    match args.tab {
        Some(tab) => println!("{}", report::format_strategy(tab)),
        None => {
            for (i, tab) in report::StrategyTab::ALL.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", report::format_strategy(tab));
            }
        }
    }
    Ok(())
}

/// Rewrite argv so `compass` defaults to `compass tui`.
///
/// Rules:
/// - `compass`                       -> `compass tui`
/// - `compass --data-dir X ...`      -> `compass tui --data-dir X ...`
/// - `compass --help/--version/-h`   -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "tui" | "quiz" | "types" | "classify" | "strategies"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is (clap will produce the usage error).
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["compass"])), argv(&["compass", "tui"]));
    }

    #[test]
    fn leading_flag_is_treated_as_tui_flags() {
        assert_eq!(
            rewrite_args(argv(&["compass", "--data-dir", "x"])),
            argv(&["compass", "tui", "--data-dir", "x"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["compass", "classify", "-a", "driver"])),
            argv(&["compass", "classify", "-a", "driver"])
        );
        assert_eq!(rewrite_args(argv(&["compass", "--help"])), argv(&["compass", "--help"]));
    }
}
