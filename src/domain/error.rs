// src/domain/error.rs
use thiserror::Error;

use crate::constants::MAX_TITLE_LEN;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Title cannot be empty!")]
    EmptyTitle,
    #[error("Title cannot exceed {max} characters! (got {len})", max = MAX_TITLE_LEN)]
    TitleTooLong { len: usize },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Note not found: {0}")]
    NoteNotFound(usize),
    #[error("No note selected!")]
    NoSelection,
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed notes file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DomainError {
    /// Errors caused by user input or selection state.
    ///
    /// These are reported inline and abort the triggering action without side
    /// effects; everything else propagates.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyTitle
                | DomainError::TitleTooLong { .. }
                | DomainError::UnknownCategory(_)
                | DomainError::NoteNotFound(_)
                | DomainError::NoSelection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_validation_errors_when_classifying_then_they_are_user_errors() {
        assert!(DomainError::EmptyTitle.is_user_error());
        assert!(DomainError::TitleTooLong { len: 51 }.is_user_error());
        assert!(DomainError::UnknownCategory("Garden".to_string()).is_user_error());
        assert!(DomainError::NoSelection.is_user_error());
        assert!(DomainError::NoteNotFound(3).is_user_error());
    }

    #[test]
    fn given_io_error_when_classifying_then_it_is_not_a_user_error() {
        let err = DomainError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert!(!err.is_user_error());
    }

    #[test]
    fn given_title_too_long_when_formatting_then_mentions_limit() {
        let msg = DomainError::TitleTooLong { len: 60 }.to_string();
        assert_eq!(msg, "Title cannot exceed 50 characters! (got 60)");
    }
}
