// src/infrastructure/json_store.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, instrument};

use crate::application::NoteStore;
use crate::constants::JSON_INDENT;
use crate::domain::{DomainError, Project, ProjectRecord};

/// Stores the whole project as one pretty-printed JSON document.
///
/// Every save rewrites the file completely; there is no partial-write
/// protection.
#[derive(Debug, Clone)]
pub struct JsonNoteStore {
    path: PathBuf,
}

impl JsonNoteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Creating new JsonNoteStore");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serialize with a four-space indent. serde_json writes non-ASCII text as
/// literal UTF-8.
pub fn to_json(project: &Project) -> Result<Vec<u8>, DomainError> {
    let record = ProjectRecord::from(project);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    record.serialize(&mut ser)?;
    Ok(buf)
}

pub fn from_json(text: &str) -> Result<Project, DomainError> {
    let record: ProjectRecord = serde_json::from_str(text)?;
    Project::try_from(record)
}

impl NoteStore for JsonNoteStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> Result<Project, DomainError> {
        if !self.path.exists() {
            info!("Notes file does not exist yet, starting with an empty project");
            return Ok(Project::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let project = from_json(&text)?;
        debug!(notes = project.len(), "Parsed notes file");
        Ok(project)
    }

    #[instrument(level = "debug", skip(self, project), fields(path = %self.path.display(), notes = project.len()))]
    fn save(&mut self, project: &Project) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = to_json(project)?;
        fs::write(&self.path, bytes)?;
        debug!("Wrote notes file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Note};
    use tempfile::TempDir;

    #[test]
    fn given_missing_file_when_loading_then_returns_empty_project() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonNoteStore::new(temp_dir.path().join("absent.notes"));

        let project = store.load().unwrap();

        assert!(project.is_empty());
    }

    #[test]
    fn given_non_ascii_content_when_saving_then_writes_literal_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");
        let mut store = JsonNoteStore::new(&path);
        let project = Project::from(vec![Note::new("Покупки", Category::Home, "молоко")]);

        store.save(&project).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"title\": \"Покупки\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn given_project_when_saving_then_uses_four_space_indent() {
        let project = Project::from(vec![Note::new("A", Category::Work, "")]);

        let text = String::from_utf8(to_json(&project).unwrap()).unwrap();

        assert!(text.starts_with("{\n    \"notes\": [\n        {\n            \"title\": \"A\""));
    }

    #[test]
    fn given_nested_missing_directory_when_saving_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Documents").join("NoteApp.notes");
        let mut store = JsonNoteStore::new(&path);

        store.save(&Project::new()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn given_malformed_json_when_loading_then_returns_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");
        fs::write(&path, "{ \"notes\": [ ").unwrap();
        let mut store = JsonNoteStore::new(&path);

        assert!(matches!(store.load(), Err(DomainError::Parse(_))));
    }

    #[test]
    fn given_document_without_notes_key_when_loading_then_returns_parse_error() {
        let result = from_json("{}");
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }

    #[test]
    fn given_python_style_timestamps_when_parsing_then_accepts_microseconds() {
        let text = r#"{
    "notes": [
        {
            "title": "Groceries",
            "category": "Home",
            "content": "milk, eggs",
            "created_at": "2025-01-15T10:30:00.123456",
            "updated_at": "2025-01-15T10:31:00"
        }
    ]
}"#;

        let project = from_json(text).unwrap();

        let note = project.get(0).unwrap();
        assert_eq!(note.category(), Category::Home);
        assert!(note.updated_at() > note.created_at());
    }
}
