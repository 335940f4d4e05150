// src/application/note_store.rs
use crate::domain::{DomainError, Project};

/// Persistence seam for the whole note collection.
pub trait NoteStore {
    /// Load the collection; a missing backing file yields an empty project.
    fn load(&mut self) -> Result<Project, DomainError>;

    /// Replace the stored collection with `project`.
    fn save(&mut self, project: &Project) -> Result<(), DomainError>;
}
