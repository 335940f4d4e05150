// src/domain/note.rs
use chrono::{Local, NaiveDateTime};

use crate::constants::MAX_TITLE_LEN;
use crate::domain::Category;
use crate::util::text::truncate_chars;

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    title: String,
    category: Category,
    content: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

/// Fields to change on an existing note; `None` or empty strings leave the
/// attribute untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub content: Option<String>,
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Note {
    /// Titles longer than the limit are truncated silently.
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        let created_at = now();
        Self {
            title: truncate_chars(&title.into(), MAX_TITLE_LEN),
            category,
            content: content.into(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Rebuild a note with stored timestamps.
    pub(crate) fn with_timestamps(
        title: String,
        category: Category,
        content: String,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: truncate_chars(&title, MAX_TITLE_LEN),
            category,
            content,
            created_at,
            updated_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Apply an edit. `updated_at` is refreshed even when no field changes.
    pub fn update(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = truncate_chars(&title, MAX_TITLE_LEN);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(content) = update.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        // never step behind a previous timestamp, even if the wall clock does
        self.updated_at = now().max(self.updated_at);
    }

    /// List entry text: `title (category)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.category.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_long_title_when_constructing_then_keeps_first_fifty_chars() {
        // Arrange
        let title = "x".repeat(80);

        // Act
        let note = Note::new(title.clone(), Category::Work, "");

        // Assert
        assert_eq!(note.title(), &title[..50]);
    }

    #[test]
    fn given_multibyte_title_when_constructing_then_truncates_by_chars() {
        let title = "ж".repeat(60);
        let note = Note::new(title, Category::People, "");
        assert_eq!(note.title().chars().count(), 50);
    }

    #[test]
    fn given_new_note_when_constructed_then_timestamps_are_equal() {
        let note = Note::new("Groceries", Category::Home, "milk, eggs");
        assert_eq!(note.created_at(), note.updated_at());
    }

    #[test]
    fn given_empty_update_when_applied_then_only_updated_at_moves() {
        // Arrange
        let mut note = Note::new("Groceries", Category::Home, "milk, eggs");
        let before = note.clone();

        // Act
        note.update(NoteUpdate::default());

        // Assert
        assert_eq!(note.title(), before.title());
        assert_eq!(note.category(), before.category());
        assert_eq!(note.content(), before.content());
        assert_eq!(note.created_at(), before.created_at());
        assert!(note.updated_at() >= before.updated_at());
    }

    #[test]
    fn given_empty_strings_when_updating_then_fields_are_kept() {
        let mut note = Note::new("Groceries", Category::Home, "milk, eggs");

        note.update(NoteUpdate {
            title: Some(String::new()),
            category: None,
            content: Some(String::new()),
        });

        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.content(), "milk, eggs");
    }

    #[test]
    fn given_all_fields_when_updating_then_replaces_and_truncates_title() {
        let mut note = Note::new("Groceries", Category::Home, "milk, eggs");

        note.update(NoteUpdate {
            title: Some("y".repeat(70)),
            category: Some(Category::Finance),
            content: Some("budget".to_string()),
        });

        assert_eq!(note.title(), "y".repeat(50));
        assert_eq!(note.category(), Category::Finance);
        assert_eq!(note.content(), "budget");
    }

    #[test]
    fn given_future_updated_at_when_updating_then_timestamp_never_goes_back() {
        let created = now();
        let future = created + chrono::Duration::days(1);
        let mut note = Note::with_timestamps(
            "Trip".to_string(),
            Category::Misc,
            String::new(),
            created,
            future,
        );

        note.update(NoteUpdate::default());

        assert_eq!(note.updated_at(), future);
    }

    #[test]
    fn given_note_when_building_display_label_then_includes_category() {
        let note = Note::new("Groceries", Category::Home, "");
        assert_eq!(note.display_label(), "Groceries (Home)");
    }
}
