// src/ports/tui/form.rs
use crate::application::NoteForm;
use crate::domain::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Content,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::Content,
            FormField::Content => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Category => FormField::Title,
            FormField::Content => FormField::Category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Add => "Add Note",
            FormKind::Edit => "Edit Note",
        }
    }
}

/// Editable text with a byte cursor that always sits on a char boundary.
#[derive(Debug, Clone)]
pub struct FieldValue {
    value: String,
    cursor: usize,
}

impl FieldValue {
    pub fn new(value: &str) -> Self {
        FieldValue {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn move_left(&mut self) {
        if let Some(ch) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.value[..self.cursor]
            .rfind('\n')
            .map_or(0, |i| i + 1);
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value[self.cursor..]
            .find('\n')
            .map_or(self.value.len(), |i| self.cursor + i);
    }

    pub fn backspace(&mut self) {
        if let Some(ch) = self.value[..self.cursor].chars().next_back() {
            let prev = self.cursor - ch.len_utf8();
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.value.drain(self.cursor..end);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}

/// State of the add/edit popup.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub field: FormField,
    pub title: FieldValue,
    pub category: Category,
    pub content: FieldValue,
}

impl FormState {
    pub fn new(kind: FormKind, form: &NoteForm) -> Self {
        Self {
            kind,
            field: FormField::Title,
            title: FieldValue::new(&form.title),
            category: form.category,
            content: FieldValue::new(&form.content),
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Text field under focus; `None` while the category picker is focused.
    pub fn active_text_mut(&mut self) -> Option<&mut FieldValue> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Content => Some(&mut self.content),
            FormField::Category => None,
        }
    }

    pub fn to_form(&self) -> NoteForm {
        NoteForm::new(self.title.value(), self.category, self.content.value())
    }
}
