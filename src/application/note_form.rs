// src/application/note_form.rs
use crate::constants::MAX_TITLE_LEN;
use crate::domain::{Category, DomainError, Note, NoteUpdate};
use crate::util::text::char_len;

/// Values entered in the add/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub category: Category,
    pub content: String,
}

/// Form contents that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm {
    pub title: String,
    pub category: Category,
    pub content: String,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
        }
    }

    /// Pre-fill from an existing note.
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title(), note.category(), note.content())
    }

    /// Trim input and check the title is present and within the length limit.
    pub fn validate(&self) -> Result<ValidForm, DomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        let len = char_len(title);
        if len > MAX_TITLE_LEN {
            return Err(DomainError::TitleTooLong { len });
        }
        Ok(ValidForm {
            title: title.to_string(),
            category: self.category,
            content: self.content.trim().to_string(),
        })
    }
}

impl ValidForm {
    pub fn into_note(self) -> Note {
        Note::new(self.title, self.category, self.content)
    }

    pub fn into_update(self) -> NoteUpdate {
        NoteUpdate {
            title: Some(self.title),
            category: Some(self.category),
            content: Some(self.content),
        }
    }
}
