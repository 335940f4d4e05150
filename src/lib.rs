// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::application::{about, NoteController, NoteForm, NoteStore};
use crate::cli::args::{Args, Command};
use crate::domain::Category;
use crate::infrastructure::config::{resolve_notes_path, Config};
use crate::infrastructure::JsonNoteStore;
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting noteapp with arguments");

    // Initialize infrastructure
    let config = Config::load_or_default(args.config.as_deref())?;
    let notes_path = resolve_notes_path(args.file, &config)?;
    let store = JsonNoteStore::new(&notes_path);

    // Initialize application
    let mut controller = NoteController::open(store)
        .with_context(|| format!("Failed to load notes from {}", notes_path.display()))?;

    // Initialize presentation
    let presenter = TextPresenter::new();

    let command = args.command.unwrap_or(Command::Ui);
    info!(?command, path = %notes_path.display(), "Executing command");
    match command {
        Command::Ui => {
            let location = controller.store().path().display().to_string();
            ports::tui::run(controller, &location)?;
        }
        Command::List => {
            println!("{}", presenter.render_list(&controller.list_entries()));
        }
        Command::Show { index, json } => {
            let note = controller.select(index)?;
            if json {
                println!("{}", presenter.render_json(note)?);
            } else {
                println!("{}", presenter.render_note(note));
            }
        }
        Command::Add {
            title,
            category,
            content,
        } => {
            let form = NoteForm::new(title, category.parse::<Category>()?, content);
            let index = controller.add(&form)?;
            println!("Added note {index}: {}", controller.list_entries()[index]);
        }
        Command::Edit {
            index,
            title,
            category,
            content,
        } => {
            edit_note(&mut controller, index, title, category, content)?;
            println!("Updated note {index}: {}", controller.list_entries()[index]);
        }
        Command::Remove { index, yes } => {
            controller.select(index)?;
            let prompt = controller.removal_prompt()?;
            if !yes && !confirm(&prompt, io::stdin().lock(), io::stdout())? {
                println!("Canceled.");
                return Ok(());
            }
            let removed = controller.remove_selected()?;
            println!("Removed note: {}", removed.title());
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{category}");
            }
        }
        Command::About => println!("{}", about()),
    }

    Ok(())
}

/// Apply the given fields to the note at `index`; omitted fields keep their value.
pub fn edit_note<S: NoteStore>(
    controller: &mut NoteController<S>,
    index: usize,
    title: Option<String>,
    category: Option<String>,
    content: Option<String>,
) -> Result<()> {
    controller.select(index)?;
    let mut form = controller.edit_form()?;
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(label) = category {
        form.category = label.parse()?;
    }
    if let Some(content) = content {
        form.content = content;
    }
    controller.edit_selected(&form)?;
    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` declines.
pub fn confirm(prompt: &str, mut input: impl BufRead, mut output: impl Write) -> Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        bail!("No answer given");
    }
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::util::testing::{self, MockNoteStore};

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_yes_answer_when_confirming_then_returns_true() {
        let mut out = Vec::new();

        let result = confirm("Remove?", "yes\n".as_bytes(), &mut out).unwrap();

        assert!(result);
        assert_eq!(String::from_utf8(out).unwrap(), "Remove? [y/N] ");
    }

    #[test]
    fn given_empty_answer_when_confirming_then_declines() {
        assert!(!confirm("Remove?", "\n".as_bytes(), Vec::new()).unwrap());
    }

    #[test]
    fn given_closed_input_when_confirming_then_fails() {
        assert!(confirm("Remove?", "".as_bytes(), Vec::new()).is_err());
    }

    #[test]
    fn given_only_content_when_editing_then_other_fields_are_kept() {
        let store = MockNoteStore::builder()
            .with_note(Note::new("Groceries", Category::Home, "milk, eggs"))
            .build();
        let mut controller = NoteController::open(store).unwrap();

        edit_note(
            &mut controller,
            0,
            None,
            None,
            Some("milk, eggs, bread".to_string()),
        )
        .unwrap();

        let note = controller.project().get(0).unwrap();
        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.category(), Category::Home);
        assert_eq!(note.content(), "milk, eggs, bread");
    }

    #[test]
    fn given_unknown_category_when_editing_then_fails_without_saving() {
        let store = MockNoteStore::builder()
            .with_note(Note::new("Groceries", Category::Home, ""))
            .build();
        let mut controller = NoteController::open(store).unwrap();

        let result = edit_note(&mut controller, 0, None, Some("Garden".to_string()), None);

        assert!(result.is_err());
        assert_eq!(controller.store().save_count(), 0);
    }
}
