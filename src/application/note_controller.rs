// src/application/note_controller.rs
use tracing::{debug, info, instrument};

use crate::application::{NoteForm, NoteStore};
use crate::domain::{DomainError, Note, Project};

/// Text of the About dialog.
pub fn about() -> String {
    format!(
        "NoteApp\nVersion {}\nDeveloped with Rust and ratatui.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Routes user actions to the in-memory project and persists after every
/// mutation.
///
/// Holds the single piece of UI state: the current selection. Any add or
/// remove may shift indices, so the selection is re-validated on every use
/// and cleared on removal.
pub struct NoteController<S: NoteStore> {
    store: S,
    project: Project,
    selected: Option<usize>,
}

impl<S: NoteStore> NoteController<S> {
    pub fn new(store: S, project: Project) -> Self {
        Self {
            store,
            project,
            selected: None,
        }
    }

    /// Load the project from `store`. Load failures propagate.
    pub fn open(mut store: S) -> Result<Self, DomainError> {
        let project = store.load()?;
        info!(notes = project.len(), "Loaded notes");
        Ok(Self::new(store, project))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate, append and persist a new note. Returns its index.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, form: &NoteForm) -> Result<usize, DomainError> {
        let note = form.validate()?.into_note();
        self.project.add_note(note);
        let index = self.project.len() - 1;
        self.persist()?;
        info!(index, "Added note");
        Ok(index)
    }

    /// Form pre-filled with the selected note.
    pub fn edit_form(&self) -> Result<NoteForm, DomainError> {
        Ok(NoteForm::from_note(self.selected_note()?))
    }

    /// Apply `form` to the selected note in place and persist.
    #[instrument(level = "debug", skip(self))]
    pub fn edit_selected(&mut self, form: &NoteForm) -> Result<(), DomainError> {
        let index = self.selected_index()?;
        let update = form.validate()?.into_update();
        let note = self
            .project
            .get_mut(index)
            .ok_or(DomainError::NoteNotFound(index))?;
        note.update(update);
        self.persist()?;
        info!(index, "Edited note");
        Ok(())
    }

    /// Confirmation question naming the note that would be removed.
    pub fn removal_prompt(&self) -> Result<String, DomainError> {
        let note = self.selected_note()?;
        Ok(format!(
            "Do you really want to remove this note: {}?",
            note.title()
        ))
    }

    /// Remove the selected note, clear the selection and persist.
    ///
    /// Callers ask for confirmation first (see [`Self::removal_prompt`]).
    #[instrument(level = "debug", skip(self))]
    pub fn remove_selected(&mut self) -> Result<Note, DomainError> {
        let index = self.selected_index()?;
        let removed = self
            .project
            .remove_at(index)
            .ok_or(DomainError::NoteNotFound(index))?;
        self.selected = None;
        self.persist()?;
        info!(index, title = removed.title(), "Removed note");
        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<&Note, DomainError> {
        if index >= self.project.len() {
            return Err(DomainError::NoteNotFound(index));
        }
        debug!(index, "Selected note");
        self.selected = Some(index);
        self.selected_note()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Current selection, if it still points into the list.
    pub fn selected(&self) -> Option<usize> {
        self.selected.filter(|i| *i < self.project.len())
    }

    pub fn selected_note(&self) -> Result<&Note, DomainError> {
        let index = self.selected_index()?;
        self.project
            .get(index)
            .ok_or(DomainError::NoteNotFound(index))
    }

    /// Rebuild the list entries in current order.
    pub fn list_entries(&self) -> Vec<String> {
        self.project.notes().iter().map(Note::display_label).collect()
    }

    fn selected_index(&self) -> Result<usize, DomainError> {
        self.selected().ok_or(DomainError::NoSelection)
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        self.store.save(&self.project)
    }
}
