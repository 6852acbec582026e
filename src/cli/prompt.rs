//! Plain-terminal quiz prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `compass quiz` and answer by number" UX
//!
//! Input per question: an option number, `p` for the previous question, or
//! `q` to cancel.

use std::io::{self, Write};

use crate::app::startup::LoadedData;
use crate::error::AppError;
use crate::quiz::{QuizSession, classify};
use crate::report;

/// What a line of user input means for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Answer(usize),
    Previous,
    Quit,
    Invalid,
}

/// Run the full quiz loop on stdin/stdout and print the result report.
pub fn run_quiz_prompt(data: &LoadedData) -> Result<(), AppError> {
    if data.catalog.is_empty() {
        return Err(AppError::new(3, "No customer types loaded; cannot run the quiz."));
    }
    if data.questions.is_empty() {
        return Err(AppError::new(3, "No quiz questions loaded; cannot run the quiz."));
    }

    let mut session = QuizSession::new(data.questions.clone());
    session.start();

    loop {
        let Some(question) = session.current_question().cloned() else {
            break;
        };

        println!(
            "\nQuestion {} of {}: {}",
            session.current_index() + 1,
            session.total(),
            question.question
        );
        for (i, opt) in question.answers.iter().enumerate() {
            println!("{:>3}) {}", i + 1, opt.text);
        }

        let input = read_line(&format!(
            "Answer (1-{}, p = previous, q = quit): ",
            question.answers.len()
        ))?;

        match parse_choice(&input, question.answers.len()) {
            Choice::Answer(i) => {
                // The session is mid-quiz here, so this cannot fail.
                session
                    .select_answer(question.answers[i].type_tag.clone())
                    .map_err(|e| AppError::new(4, e.to_string()))?;
            }
            Choice::Previous => {
                session
                    .previous()
                    .map_err(|e| AppError::new(4, e.to_string()))?;
            }
            Choice::Quit => return Err(AppError::new(2, "Canceled.")),
            Choice::Invalid => {
                println!(
                    "Invalid input '{}'. Enter a number between 1 and {}.",
                    input.trim(),
                    question.answers.len()
                );
            }
        }
    }

    let result =
        classify(session.answers(), &data.catalog).map_err(|e| AppError::new(3, e.to_string()))?;

    println!();
    println!("{}", report::format_result(&result));
    Ok(())
}

/// Interpret one input line against a question with `n` options.
pub fn parse_choice(input: &str, n: usize) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    if input.eq_ignore_ascii_case("p") {
        return Choice::Previous;
    }
    match input.parse::<usize>() {
        Ok(choice) if (1..=n).contains(&choice) => Choice::Answer(choice - 1),
        _ => Choice::Invalid,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::new(4, format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::new(2, "No input received (stdin closed)."));
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_inside_the_range_select_answers() {
        assert_eq!(parse_choice("1", 4), Choice::Answer(0));
        assert_eq!(parse_choice(" 4 \n", 4), Choice::Answer(3));
    }

    #[test]
    fn numbers_outside_the_range_are_invalid() {
        assert_eq!(parse_choice("0", 4), Choice::Invalid);
        assert_eq!(parse_choice("5", 4), Choice::Invalid);
        assert_eq!(parse_choice("banana", 4), Choice::Invalid);
    }

    #[test]
    fn control_keys_are_case_insensitive() {
        assert_eq!(parse_choice("q", 4), Choice::Quit);
        assert_eq!(parse_choice("Q", 4), Choice::Quit);
        assert_eq!(parse_choice("p\n", 4), Choice::Previous);
        assert_eq!(parse_choice("P", 4), Choice::Previous);
    }
}
