// src/ports/tui/mod.rs
//
// Interactive terminal front end. Thin adapter: every decision about notes is
// made by NoteController; this module only maps keys to controller calls and
// draws the result.
use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::application::{about, NoteController, NoteForm, NoteStore};
use crate::constants::EVENT_POLL_MS;
use crate::domain::DomainError;

mod draw;
pub mod form;
pub mod menu;

use form::{FormField, FormKind, FormState};
use menu::{MenuAction, MenuState};

enum Mode {
    Normal,
    Menu(MenuState),
    Form(FormState),
    Confirm { prompt: String },
}

/// Blocking message popup; any key dismisses it.
struct Notice {
    title: &'static str,
    message: String,
}

pub struct App<S: NoteStore> {
    controller: NoteController<S>,
    list_state: ListState,
    mode: Mode,
    notice: Option<Notice>,
    status: String,
    should_quit: bool,
}

/// Run the UI until the user exits. Persistence errors end the session and
/// propagate after the terminal has been restored.
pub fn run<S: NoteStore>(controller: NoteController<S>, location: &str) -> Result<()> {
    let mut app = App::new(controller, location);
    let mut terminal = setup_terminal()?;
    let result = app.event_loop(&mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

impl<S: NoteStore> App<S> {
    fn new(controller: NoteController<S>, location: &str) -> Self {
        let status = format!(
            "{} note(s) loaded from {}",
            controller.project().len(),
            location
        );
        App {
            controller,
            list_state: ListState::default(),
            mode: Mode::Normal,
            notice: None,
            status,
            should_quit: false,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.list_state.select(self.controller.selected());
            terminal
                .draw(|f| draw::draw(f, self))
                .context("rendering frame")?;
            if event::poll(Duration::from_millis(EVENT_POLL_MS)).context("polling for terminal events")? {
                if let Event::Key(key) = event::read().context("reading terminal event")? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key)?;
                }
            }
        }
        info!("Exiting UI");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.notice.take().is_some() {
            return Ok(());
        }
        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        self.mode = match mode {
            Mode::Normal => {
                self.handle_normal_key(key)?;
                // an action may have switched modes already
                std::mem::replace(&mut self.mode, Mode::Normal)
            }
            Mode::Menu(menu) => self.handle_menu_key(menu, key)?,
            Mode::Form(form) => self.handle_form_key(form, key)?,
            Mode::Confirm { prompt } => self.handle_confirm_key(prompt, key)?,
        };
        Ok(())
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Esc => self.controller.clear_selection(),
            KeyCode::Home => self.select(0),
            KeyCode::End => {
                let len = self.controller.project().len();
                if len > 0 {
                    self.select(len - 1);
                }
            }
            KeyCode::Char('a') => self.perform(MenuAction::Add)?,
            KeyCode::Char('e') | KeyCode::Enter => self.perform(MenuAction::Edit)?,
            KeyCode::Char('d') | KeyCode::Delete => self.perform(MenuAction::Remove)?,
            KeyCode::Char('?') => self.perform(MenuAction::About)?,
            KeyCode::F(1) => self.mode = Mode::Menu(MenuState::new(0)),
            KeyCode::F(2) => self.mode = Mode::Menu(MenuState::new(1)),
            KeyCode::F(3) => self.mode = Mode::Menu(MenuState::new(2)),
            _ => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, mut menu: MenuState, key: KeyEvent) -> Result<Mode> {
        match key.code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Left => menu.prev_menu(),
            KeyCode::Right => menu.next_menu(),
            KeyCode::Up => menu.prev_item(),
            KeyCode::Down => menu.next_item(),
            KeyCode::Enter => {
                self.perform(menu.action())?;
                return Ok(std::mem::replace(&mut self.mode, Mode::Normal));
            }
            _ => {}
        }
        Ok(Mode::Menu(menu))
    }

    fn handle_form_key(&mut self, mut form: FormState, key: KeyEvent) -> Result<Mode> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.status = "Canceled".into();
                return Ok(Mode::Normal);
            }
            KeyCode::Char('s') if control => return self.submit(form),
            KeyCode::Enter if form.field != FormField::Content || control => {
                return self.submit(form)
            }
            KeyCode::Enter => form.content.insert_char('\n'),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left if form.field == FormField::Category => {
                form.category = form.category.prev()
            }
            KeyCode::Right if form.field == FormField::Category => {
                form.category = form.category.next()
            }
            code => {
                if let Some(field) = form.active_text_mut() {
                    match code {
                        KeyCode::Left => field.move_left(),
                        KeyCode::Right => field.move_right(),
                        KeyCode::Home => field.move_home(),
                        KeyCode::End => field.move_end(),
                        KeyCode::Backspace => field.backspace(),
                        KeyCode::Delete => field.delete(),
                        KeyCode::Char(c)
                            if !key
                                .modifiers
                                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                        {
                            field.insert_char(c)
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(Mode::Form(form))
    }

    fn handle_confirm_key(&mut self, prompt: String, key: KeyEvent) -> Result<Mode> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                match self.controller.remove_selected() {
                    Ok(note) => self.status = format!("Removed \"{}\"", note.title()),
                    Err(err) => self.report(err)?,
                }
                Ok(Mode::Normal)
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.status = "Remove canceled".into();
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::Confirm { prompt }),
        }
    }

    /// Dispatch a button/menu action.
    fn perform(&mut self, action: MenuAction) -> Result<()> {
        debug!(?action, "Performing action");
        match action {
            MenuAction::Exit => self.should_quit = true,
            MenuAction::Add => {
                self.mode = Mode::Form(FormState::new(FormKind::Add, &NoteForm::default()))
            }
            MenuAction::Edit => match self.controller.edit_form() {
                Ok(form) => self.mode = Mode::Form(FormState::new(FormKind::Edit, &form)),
                Err(err) => self.report(err)?,
            },
            MenuAction::Remove => match self.controller.removal_prompt() {
                Ok(prompt) => self.mode = Mode::Confirm { prompt },
                Err(err) => self.report(err)?,
            },
            MenuAction::About => {
                self.notice = Some(Notice {
                    title: "About",
                    message: about(),
                })
            }
        }
        Ok(())
    }

    fn submit(&mut self, state: FormState) -> Result<Mode> {
        let form = state.to_form();
        let result = match state.kind {
            FormKind::Add => self.controller.add(&form).map(|_| "Added"),
            FormKind::Edit => self.controller.edit_selected(&form).map(|_| "Saved"),
        };
        match result {
            Ok(verb) => {
                self.status = format!("{} \"{}\"", verb, form.title.trim());
                Ok(Mode::Normal)
            }
            Err(err) => {
                self.report(err)?;
                Ok(Mode::Form(state))
            }
        }
    }

    /// Show user errors as a notice; anything else aborts the session.
    fn report(&mut self, err: DomainError) -> Result<()> {
        if !err.is_user_error() {
            return Err(err).context("saving notes");
        }
        let title = match err {
            DomainError::NoSelection | DomainError::NoteNotFound(_) => "Warning",
            _ => "Error",
        };
        self.notice = Some(Notice {
            title,
            message: err.to_string(),
        });
        Ok(())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.controller.project().len();
        if len == 0 {
            return;
        }
        let next = match self.controller.selected() {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
        };
        self.select(next);
    }

    fn select(&mut self, index: usize) {
        if self.controller.select(index).is_ok() {
            self.status.clear();
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("creating terminal backend")?;
    Ok(terminal)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    terminal.show_cursor()?;
    Ok(())
}
