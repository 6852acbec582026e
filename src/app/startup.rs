//! Shared startup/load logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch catalog -> fetch questions -> validate -> hand to the front-end.
//!
//! The lenient entry point (`load_all`) never fails: a broken source is
//! logged and leaves its collection empty, and the front-end renders over
//! whatever survived. One-shot commands that cannot do anything useful with
//! an empty catalog use the strict per-document loaders instead.

use crate::domain::{QuizQuestion, TypeCatalog};
use crate::error::AppError;
use crate::io::load::{self, Finding};
use crate::io::source::DataSource;

/// Resolved locations of the two data documents.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub types: DataSource,
    pub questions: DataSource,
}

/// Everything the front-ends need after startup.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub catalog: TypeCatalog,
    pub questions: Vec<QuizQuestion>,
    /// Record-level validation findings (already logged; kept for display).
    pub findings: Vec<Finding>,
}

/// Load both documents, logging failures and carrying on with what loaded.
pub fn load_all(sources: &DataSources) -> LoadedData {
    let catalog = match load_catalog(&sources.types) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!(
                "Failed to load customer types from '{}': {e}",
                sources.types.describe()
            );
            TypeCatalog::default()
        }
    };

    let (questions, findings) = match load_questions(&sources.questions, &catalog) {
        Ok(load) => (load.questions, load.findings),
        Err(e) => {
            log::error!(
                "Failed to load quiz questions from '{}': {e}",
                sources.questions.describe()
            );
            (Vec::new(), Vec::new())
        }
    };

    for finding in &findings {
        log::warn!("{finding}");
    }

    LoadedData {
        catalog,
        questions,
        findings,
    }
}

/// Fetch + parse + validate the customer-type catalog (strict).
pub fn load_catalog(source: &DataSource) -> Result<TypeCatalog, AppError> {
    let text = source.fetch()?;
    load::parse_catalog(&text)
}

/// Fetch + parse + validate the question bank against a catalog (strict).
pub fn load_questions(
    source: &DataSource,
    catalog: &TypeCatalog,
) -> Result<load::QuestionLoad, AppError> {
    let text = source.fetch()?;
    load::parse_questions(&text, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"[{
        "id": "driver", "name": "The Driver", "icon": "X", "color": "red",
        "characteristics": [], "traits": [], "primaryMotivations": [],
        "communicationStyle": "s", "decisionTime": "d", "engagementTips": []
    }]"#;

    const QUESTIONS_JSON: &str =
        r#"[{"question": "Q1", "answers": [{"text": "a", "type": "driver"}]}]"#;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> DataSource {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        DataSource::File(path)
    }

    #[test]
    fn load_all_returns_both_collections_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DataSources {
            types: write_temp(&dir, "t.json", CATALOG_JSON),
            questions: write_temp(&dir, "q.json", QUESTIONS_JSON),
        };

        let data = load_all(&sources);
        assert_eq!(data.catalog.len(), 1);
        assert_eq!(data.questions.len(), 1);
        assert!(data.findings.is_empty());
    }

    #[test]
    fn missing_catalog_leaves_collections_empty_but_does_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DataSources {
            types: DataSource::file(dir.path().join("absent.json")),
            questions: write_temp(&dir, "q.json", QUESTIONS_JSON),
        };

        let data = load_all(&sources);
        assert!(data.catalog.is_empty());
        // Questions still parse; the cross-check was skipped over the empty catalog.
        assert_eq!(data.questions.len(), 1);
    }

    #[test]
    fn malformed_questions_leave_the_bank_empty_but_keep_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DataSources {
            types: write_temp(&dir, "t.json", CATALOG_JSON),
            questions: write_temp(&dir, "q.json", "not json at all"),
        };

        let data = load_all(&sources);
        assert_eq!(data.catalog.len(), 1);
        assert!(data.questions.is_empty());
    }
}
