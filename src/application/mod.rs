// src/application/mod.rs
pub mod note_controller;
pub mod note_form;
pub mod note_store;

pub use note_controller::{about, NoteController};
pub use note_form::NoteForm;
pub use note_store::NoteStore;
