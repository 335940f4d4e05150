// src/domain/record.rs
//
// Persisted JSON shape. Kept separate from the domain types so that a bad
// category label surfaces as a validation error instead of a parse error.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, DomainError, Note, Project};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub title: String,
    pub category: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub notes: Vec<NoteRecord>,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            category: note.category().label().to_string(),
            content: note.content().to_string(),
            created_at: note.created_at(),
            updated_at: note.updated_at(),
        }
    }
}

impl TryFrom<NoteRecord> for Note {
    type Error = DomainError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        let category = Category::from_label(&record.category)?;
        Ok(Note::with_timestamps(
            record.title,
            category,
            record.content,
            record.created_at,
            record.updated_at,
        ))
    }
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            notes: project.notes().iter().map(NoteRecord::from).collect(),
        }
    }
}

impl TryFrom<ProjectRecord> for Project {
    type Error = DomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let notes = record
            .notes
            .into_iter()
            .map(Note::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Project::from(notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_every_category_when_converting_through_record_then_note_is_identical() {
        for category in Category::ALL {
            // Arrange
            let note = Note::new("Title", category, "body");

            // Act
            let restored = Note::try_from(NoteRecord::from(&note)).expect("valid record");

            // Assert
            assert_eq!(restored, note);
        }
    }

    #[test]
    fn given_record_with_unknown_category_when_converting_then_fails_validation() {
        let mut record = NoteRecord::from(&Note::new("Title", Category::Work, ""));
        record.category = "Hobby".to_string();

        let result = Note::try_from(record);

        assert!(matches!(result, Err(DomainError::UnknownCategory(l)) if l == "Hobby"));
    }

    #[test]
    fn given_one_bad_note_when_converting_project_then_whole_conversion_fails() {
        let mut record = ProjectRecord::from(&Project::from(vec![
            Note::new("Ok", Category::Home, ""),
            Note::new("Bad", Category::Home, ""),
        ]));
        record.notes[1].category = "???".to_string();

        assert!(Project::try_from(record).is_err());
    }

    #[test]
    fn given_project_when_converting_to_record_then_keeps_order_and_labels() {
        let project = Project::from(vec![
            Note::new("One", Category::Finance, ""),
            Note::new("Two", Category::Health, ""),
        ]);

        let record = ProjectRecord::from(&project);

        assert_eq!(record.notes[0].category, "Finance");
        assert_eq!(record.notes[1].title, "Two");
        assert_eq!(record.notes[1].category, "Health");
    }
}
