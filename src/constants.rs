// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and
// usage context.

/// Maximum number of characters (Unicode scalar values) in a note title.
///
/// Longer titles are truncated on construction and rejected by form validation.
///
/// Used in: `domain/note.rs`, `application/note_form.rs`
pub const MAX_TITLE_LEN: usize = 50;

/// File name of the notes document inside the default directory.
///
/// Used in: `infrastructure/config.rs`
pub const NOTES_FILE_NAME: &str = "NoteApp.notes";

/// Directory below the user's home that holds the notes file by default.
///
/// Used in: `infrastructure/config.rs`
pub const NOTES_DIR_NAME: &str = "Documents";

/// Sub-directory of the platform config dir that holds `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "noteapp";

/// Indentation of the persisted JSON document.
///
/// Used in: `infrastructure/json_store.rs`
pub const JSON_INDENT: &[u8] = b"    ";

/// Poll interval of the terminal event loop in milliseconds.
///
/// Only bounds how long a frame waits for input; no work happens on timeout.
///
/// Used in: `ports/tui/mod.rs`
pub const EVENT_POLL_MS: u64 = 250;
