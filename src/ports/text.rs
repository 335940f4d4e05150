// src/ports/text.rs
use anyhow::Result;
use tracing::instrument;

use crate::domain::{Note, NoteRecord};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Plain-text rendering for the command-line surface.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One `index: title (category)` line per entry.
    pub fn render_list(&self, entries: &[String]) -> String {
        if entries.is_empty() {
            return "No notes.".to_string();
        }
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{i}: {entry}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[instrument(level = "trace", skip(self))]
    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!(
            "Title: {}\nCategory: {}\nCreated: {}\nUpdated: {}\n",
            note.title(),
            note.category(),
            note.created_at().format(TIMESTAMP_FORMAT),
            note.updated_at().format(TIMESTAMP_FORMAT),
        );
        if !note.content().is_empty() {
            out.push('\n');
            out.push_str(note.content());
        }
        out
    }

    /// The note exactly as it is stored on disk.
    pub fn render_json(&self, note: &Note) -> Result<String> {
        Ok(serde_json::to_string_pretty(&NoteRecord::from(note))?)
    }
}
