// src/ports/tui/draw.rs
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Rect, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use super::form::{FieldValue, FormField, FormState};
use super::menu::{MenuState, MENUS};
use super::{App, Mode};
use crate::application::NoteStore;

const MENU_ITEM_WIDTH: u16 = 8;

pub(super) fn draw<S: NoteStore>(f: &mut Frame, app: &mut App<S>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    let open_menu = match &app.mode {
        Mode::Menu(menu) => Some(*menu),
        _ => None,
    };
    draw_menu_bar(f, layout[0], open_menu);
    draw_body(f, layout[1], app);
    draw_footer(f, layout[2], &app.status);

    match &app.mode {
        Mode::Normal => {}
        Mode::Menu(menu) => draw_menu_dropdown(f, layout[0], menu),
        Mode::Form(form) => draw_form(f, form),
        Mode::Confirm { prompt } => {
            draw_popup(f, "Confirm", prompt, "[y] Yes   [n] No", 50, 25)
        }
    }
    if let Some(notice) = &app.notice {
        draw_popup(f, notice.title, &notice.message, "Press any key", 50, 25);
    }
}

fn draw_menu_bar(f: &mut Frame, area: Rect, open: Option<MenuState>) {
    let spans: Vec<Span> = MENUS
        .iter()
        .enumerate()
        .map(|(i, (title, _))| {
            let label = format!(" {:<width$}", title, width = (MENU_ITEM_WIDTH - 1) as usize);
            if open.map(|m| m.menu) == Some(i) {
                Span::styled(label, Style::default().bg(Color::Blue).fg(Color::White))
            } else {
                Span::raw(label)
            }
        })
        .collect();
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(bar, area);
}

fn draw_menu_dropdown(f: &mut Frame, bar: Rect, menu: &MenuState) {
    let items = menu.items();
    let width = items.iter().map(|(label, _)| label.len() as u16).max().unwrap_or(0) + 4;
    let x = bar.x + menu.menu as u16 * MENU_ITEM_WIDTH;
    let screen = f.area();
    let area = Rect::new(x, bar.y + 1, width, items.len() as u16 + 2).intersection(screen);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            let style = if i == menu.item {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label.to_string(), style)))
        })
        .collect();
    f.render_widget(Clear, area);
    f.render_widget(
        List::new(list_items).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_body<S: NoteStore>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = app
        .controller
        .list_entries()
        .into_iter()
        .map(ListItem::new)
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, columns[0], &mut app.list_state);

    let (title, content) = match app.controller.selected_note() {
        Ok(note) => (note.title().to_string(), note.content().to_string()),
        Err(_) => (String::new(), String::new()),
    };
    let detail = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[1]);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Title: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(title),
        ]))
        .block(Block::default().borders(Borders::ALL)),
        detail[0],
    );
    f.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Content")),
        detail[1],
    );
}

fn draw_footer(f: &mut Frame, area: Rect, status: &str) {
    let help = "[a] Add  [e] Edit  [d] Remove  [?] About  [F1-F3] Menu  [q] Exit";
    let text = if status.is_empty() {
        help.to_string()
    } else {
        format!("{status}  |  {help}")
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_form(f: &mut Frame, form: &FormState) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(form.kind.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let focused = |field: FormField| {
        if form.field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };
    let text_of = |field: FormField, value: &FieldValue| {
        if form.field == field {
            value.with_caret()
        } else {
            value.value().to_string()
        }
    };

    f.render_widget(
        Paragraph::new(text_of(FormField::Title, &form.title)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Title")
                .border_style(focused(FormField::Title)),
        ),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!("◀ {} ▶", form.category.label())).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Category")
                .border_style(focused(FormField::Category)),
        ),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(text_of(FormField::Content, &form.content))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Content")
                    .border_style(focused(FormField::Content)),
            ),
        rows[2],
    );
    f.render_widget(
        Paragraph::new("[Tab] Next field  [Ctrl+S] OK  [Esc] Cancel")
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn draw_popup(f: &mut Frame, title: &str, message: &str, hint: &str, pct_x: u16, pct_y: u16) {
    let area = centered_rect(pct_x, pct_y, f.area());
    f.render_widget(Clear, area);
    let mut lines: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
