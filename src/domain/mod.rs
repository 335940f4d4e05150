// src/domain/mod.rs
pub mod category;
pub mod error;
pub mod note;
pub mod project;
pub mod record;

pub use category::Category;
pub use error::DomainError;
pub use note::{Note, NoteUpdate};
pub use project::Project;
pub use record::{NoteRecord, ProjectRecord};
