//! Parse and validate the two JSON data documents.
//!
//! Design goals, mirrored across both loaders:
//!
//! - **Typed at the boundary**: payloads land in the `domain` records or not
//!   at all; no untyped values travel further in.
//! - **Catalog problems are hard errors** (duplicate/empty ids): the catalog
//!   is the referential root, so a broken one is unusable.
//! - **Question problems are record-level findings**: a bad option or an
//!   empty question is dropped and reported, the rest of the bank survives.
//! - **Deterministic**: input order is preserved everywhere.

use crate::domain::{CustomerType, QuizQuestion, TypeCatalog};
use crate::error::AppError;

/// A record-level problem found while validating the question bank.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Zero-based index of the question in the source document.
    pub index: usize,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "question #{}: {}", self.index + 1, self.message)
    }
}

/// Question-bank load output: surviving questions + what was dropped and why.
#[derive(Debug, Clone, Default)]
pub struct QuestionLoad {
    pub questions: Vec<QuizQuestion>,
    pub findings: Vec<Finding>,
}

/// Parse and validate the customer-type catalog document.
pub fn parse_catalog(json: &str) -> Result<TypeCatalog, AppError> {
    let types: Vec<CustomerType> = serde_json::from_str(json)
        .map_err(|e| AppError::new(3, format!("Invalid customer-type JSON: {e}")))?;

    for (i, t) in types.iter().enumerate() {
        if t.id.trim().is_empty() {
            return Err(AppError::new(
                3,
                format!("Customer type #{} has an empty id.", i + 1),
            ));
        }
        if types[..i].iter().any(|prev| prev.id == t.id) {
            return Err(AppError::new(
                3,
                format!("Duplicate customer type id '{}'.", t.id),
            ));
        }
    }

    Ok(TypeCatalog::new(types))
}

/// Parse and validate the question-bank document.
///
/// Options whose type-tag references no catalog entry are dropped (with a
/// finding); a question left without any options is dropped as well. When
/// the catalog itself is empty (its load already failed and was logged) the
/// cross-check is skipped: there is nothing to validate against, and the
/// quiz over an empty catalog never reaches classification anyway.
pub fn parse_questions(json: &str, catalog: &TypeCatalog) -> Result<QuestionLoad, AppError> {
    let raw: Vec<QuizQuestion> = serde_json::from_str(json)
        .map_err(|e| AppError::new(3, format!("Invalid quiz-question JSON: {e}")))?;

    let mut load = QuestionLoad::default();

    for (index, mut question) in raw.into_iter().enumerate() {
        if question.question.trim().is_empty() {
            load.findings.push(Finding {
                index,
                message: "empty question text; dropped".to_string(),
            });
            continue;
        }

        if !catalog.is_empty() {
            question.answers.retain(|opt| {
                let known = catalog.contains(&opt.type_tag);
                if !known {
                    load.findings.push(Finding {
                        index,
                        message: format!(
                            "option '{}' references unknown type '{}'; dropped",
                            opt.text, opt.type_tag
                        ),
                    });
                }
                known
            });
        }

        if question.answers.is_empty() {
            load.findings.push(Finding {
                index,
                message: "no usable answer options; dropped".to_string(),
            });
            continue;
        }

        load.questions.push(question);
    }

    Ok(load)
}
