//! Where a data document comes from.
//!
//! The two JSON documents normally sit next to the binary under `data/`, but
//! deployments that publish them over HTTP (the documents are plain static
//! resources) can point the loaders at a URL instead. Either way the fetch
//! happens exactly once, at startup, before anything becomes interactive.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A single data document location: local file or http(s) URL.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a raw CLI value: anything starting with `http://` or
    /// `https://` is a URL, everything else is a filesystem path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        DataSource::File(path.into())
    }

    /// Human-readable location for log/error messages.
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }

    /// Fetch the raw document text.
    pub fn fetch(&self) -> Result<String, AppError> {
        match self {
            DataSource::File(path) => read_file(path),
            DataSource::Url(url) => fetch_url(url),
        }
    }
}

fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map_err(|e| AppError::new(3, format!("Failed to read '{}': {e}", path.display())))
}

fn fetch_url(url: &str) -> Result<String, AppError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| AppError::new(3, format!("Failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| AppError::new(3, format!("Failed to fetch '{url}': {e}")))?
        .error_for_status()
        .map_err(|e| AppError::new(3, format!("Fetch of '{url}' failed: {e}")))?;

    response
        .text()
        .map_err(|e| AppError::new(3, format!("Failed to read body of '{url}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_prefixes_parse_as_urls() {
        assert!(matches!(
            DataSource::parse("https://example.com/customer-types.json"),
            DataSource::Url(_)
        ));
        assert!(matches!(
            DataSource::parse("http://localhost:8000/q.json"),
            DataSource::Url(_)
        ));
    }

    #[test]
    fn everything_else_parses_as_a_path() {
        assert!(matches!(
            DataSource::parse("data/customer-types.json"),
            DataSource::File(_)
        ));
        assert!(matches!(DataSource::parse("./x.json"), DataSource::File(_)));
    }

    #[test]
    fn missing_file_maps_to_data_error() {
        let err = DataSource::file("definitely/not/here.json").fetch().unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
