// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note, Project};

/// In-memory store for testing use cases that depend on NoteStore
///
/// Records every saved project so tests can assert on what would have been
/// written to disk, and can be configured to fail loading or saving.
///
/// # Examples
///
/// ```
/// use noteapp::util::testing::MockNoteStore;
/// use noteapp::domain::{Category, Note};
///
/// let store = MockNoteStore::builder()
///     .with_note(Note::new("Groceries", Category::Home, "milk, eggs"))
///     .with_save_failure()
///     .build();
/// assert_eq!(store.save_count(), 0);
/// ```
pub struct MockNoteStore {
    project: Project,
    fail_load: bool,
    fail_save: bool,
    saved: Option<Project>,
    save_count: usize,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Project passed to the last successful save.
    pub fn saved(&self) -> Option<&Project> {
        self.saved.as_ref()
    }
}

impl NoteStore for MockNoteStore {
    fn load(&mut self) -> Result<Project, DomainError> {
        if self.fail_load {
            return Err(DomainError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "mock load failure",
            )));
        }
        Ok(self.project.clone())
    }

    fn save(&mut self, project: &Project) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }
        self.saved = Some(project.clone());
        self.save_count += 1;
        Ok(())
    }
}

/// Builder for MockNoteStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_load: bool,
    fail_save: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_load: false,
            fail_save: false,
        }
    }

    /// Add a note to the project returned by load
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make load fail with an I/O error
    pub fn with_load_failure(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make every save fail with an I/O error
    pub fn with_save_failure(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            project: Project::from(self.notes),
            fail_load: self.fail_load,
            fail_save: self.fail_save,
            saved: None,
            save_count: 0,
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["crossterm", "ratatui", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
