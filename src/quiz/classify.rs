//! Answer tallying and dominant-type selection.
//!
//! The contract:
//!
//! - `scores` holds every distinct tag that appears in the answers with its
//!   occurrence count; tags that never appear are absent (not zero-filled)
//! - counts are accumulated into an ordered `(tag, count)` list in first-seen
//!   order, then stable-sorted by count descending
//! - the primary type is the first entry after that sort, so ties go to the
//!   tag seen earliest in the answer sequence
//!
//! The function is pure and deterministic: same answers, same result.

use crate::domain::{ClassificationResult, TypeCatalog, TypeScore};

/// Defined failure kinds of classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The answer sequence was empty; there is no maximum to take.
    EmptyAnswers,
    /// An answer tag has no matching entry in the type catalog.
    UnknownTag(String),
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::EmptyAnswers => write!(f, "No answers to classify."),
            ClassifyError::UnknownTag(tag) => {
                write!(f, "Answer tag '{tag}' does not match any customer type.")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify a completed answer sequence against the type catalog.
pub fn classify(
    answers: &[String],
    catalog: &TypeCatalog,
) -> Result<ClassificationResult, ClassifyError> {
    if answers.is_empty() {
        return Err(ClassifyError::EmptyAnswers);
    }

    // Every tag must resolve, not just the winner. A stray tag anywhere in
    // the sequence means the data files disagree and the tally is suspect.
    for tag in answers {
        if !catalog.contains(tag) {
            return Err(ClassifyError::UnknownTag(tag.clone()));
        }
    }

    let mut scores = tally(answers);

    // `sort_by` is stable, so equal counts keep their first-seen order and
    // the head of the list is the intended tie-break winner.
    scores.sort_by(|a, b| b.count.cmp(&a.count));

    let winner = &scores[0].tag;
    let primary = catalog
        .get(winner)
        .cloned()
        .ok_or_else(|| ClassifyError::UnknownTag(winner.clone()))?;

    Ok(ClassificationResult { primary, scores })
}

/// Count occurrences per tag, preserving first-seen order.
fn tally(answers: &[String]) -> Vec<TypeScore> {
    let mut scores: Vec<TypeScore> = Vec::new();
    for tag in answers {
        match scores.iter_mut().find(|s| &s.tag == tag) {
            Some(score) => score.count += 1,
            None => scores.push(TypeScore {
                tag: tag.clone(),
                count: 1,
            }),
        }
    }
    scores
}
