//! Visited-section progress persistence.
//!
//! The only state this app ever writes: one small JSON document listing which
//! sections have been visited, rewritten after every navigation and read once
//! at startup. Failures in either direction are logged and otherwise ignored;
//! progress display is cosmetic and must never take the app down.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::domain::{ProgressFile, Section};

/// Read the visited-set, or an empty set if the file is missing or unreadable.
pub fn load_visited(path: &Path) -> HashSet<Section> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashSet::new(),
        Err(e) => {
            log::warn!("Could not read progress file '{}': {e}", path.display());
            return HashSet::new();
        }
    };

    match serde_json::from_str::<ProgressFile>(&text) {
        Ok(file) => file.visited.into_iter().collect(),
        Err(e) => {
            log::warn!("Ignoring malformed progress file '{}': {e}", path.display());
            HashSet::new()
        }
    }
}

/// Persist the visited-set. Non-fatal: failures are logged and swallowed.
pub fn save_visited(path: &Path, visited: &HashSet<Section>) {
    // Emit in fixed section order so the file is stable across writes.
    let file = ProgressFile {
        visited: Section::ALL
            .into_iter()
            .filter(|s| visited.contains(s))
            .collect(),
        updated_at: Utc::now(),
    };

    let json = match serde_json::to_string_pretty(&file) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not encode progress: {e}");
            return;
        }
    };

    if let Err(e) = fs::write(path, json) {
        log::warn!("Could not write progress file '{}': {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_visited_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut visited = HashSet::new();
        visited.insert(Section::Home);
        visited.insert(Section::Quiz);

        save_visited(&path, &visited);
        assert_eq!(load_visited(&path), visited);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_visited(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn malformed_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "][ definitely not json").unwrap();
        assert!(load_visited(&path).is_empty());
    }

    #[test]
    fn writes_sections_in_fixed_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut visited = HashSet::new();
        visited.insert(Section::Strategies);
        visited.insert(Section::Home);
        save_visited(&path, &visited);

        let file: ProgressFile =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(file.visited, vec![Section::Home, Section::Strategies]);
    }
}
