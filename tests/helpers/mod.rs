use anyhow::{Context, Result};
use noteapp::application::NoteController;
use noteapp::infrastructure::JsonNoteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a notes file inside a temporary directory
#[allow(dead_code)]
pub struct TestNotesFile {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestNotesFile {
    /// Path to a notes file that does not exist yet
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("NoteApp.notes");
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Notes file pre-populated with `content`
    #[allow(dead_code)]
    pub fn with_content(content: &str) -> Result<Self> {
        let file = Self::new()?;
        std::fs::write(&file.path, content).context("Failed to write notes fixture")?;
        Ok(file)
    }

    #[allow(dead_code)]
    pub fn store(&self) -> JsonNoteStore {
        JsonNoteStore::new(&self.path)
    }

    /// Open a controller on a fresh store, as the app does at startup
    #[allow(dead_code)]
    pub fn open(&self) -> Result<NoteController<JsonNoteStore>> {
        Ok(NoteController::open(self.store())?)
    }

    #[allow(dead_code)]
    pub fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).context("Failed to read notes file")
    }
}

/// Notes file written by an earlier release, one note per category
#[allow(dead_code)]
pub const ALL_CATEGORIES_FIXTURE: &str = r#"{
    "notes": [
        {"title": "Standup", "category": "Work", "content": "9:30", "created_at": "2025-01-15T09:00:00", "updated_at": "2025-01-15T09:05:00"},
        {"title": "Plants", "category": "Home", "content": "water", "created_at": "2025-01-15T10:00:00.250000", "updated_at": "2025-01-15T10:00:00.250000"},
        {"title": "Run", "category": "Health", "content": "5k", "created_at": "2025-01-16T07:00:00", "updated_at": "2025-01-16T07:00:00"},
        {"title": "Call mom", "category": "People", "content": "", "created_at": "2025-01-16T18:00:00", "updated_at": "2025-01-16T18:00:00"},
        {"title": "Passport", "category": "Documents", "content": "renew", "created_at": "2025-01-17T12:00:00", "updated_at": "2025-01-18T12:00:00"},
        {"title": "Taxes", "category": "Finance", "content": "Q1", "created_at": "2025-01-17T13:00:00", "updated_at": "2025-01-17T13:00:00"},
        {"title": "Ideas", "category": "Misc", "content": "Ünïcödé ✓", "created_at": "2025-01-17T14:00:00", "updated_at": "2025-01-17T14:00:00"}
    ]
}"#;
