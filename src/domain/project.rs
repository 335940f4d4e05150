// src/domain/project.rs
use crate::domain::Note;

/// Ordered collection of notes; insertion order is display and index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    notes: Vec<Note>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Remove the note at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<Note> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Note> {
        self.notes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl From<Vec<Note>> for Project {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}
