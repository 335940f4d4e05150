// src/ports/tui/menu.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    Add,
    Edit,
    Remove,
    About,
}

/// Menu bar entries: (menu title, items).
pub const MENUS: [(&str, &[(&str, MenuAction)]); 3] = [
    ("File", &[("Exit", MenuAction::Exit)]),
    (
        "Edit",
        &[
            ("Add Note", MenuAction::Add),
            ("Edit Note", MenuAction::Edit),
            ("Remove Note", MenuAction::Remove),
        ],
    ),
    ("Help", &[("About", MenuAction::About)]),
];

/// Open drop-down: which menu and which item is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub menu: usize,
    pub item: usize,
}

impl MenuState {
    pub fn new(menu: usize) -> Self {
        Self {
            menu: menu.min(MENUS.len() - 1),
            item: 0,
        }
    }

    pub fn items(&self) -> &'static [(&'static str, MenuAction)] {
        MENUS[self.menu].1
    }

    pub fn next_menu(&mut self) {
        self.menu = (self.menu + 1) % MENUS.len();
        self.item = 0;
    }

    pub fn prev_menu(&mut self) {
        self.menu = (self.menu + MENUS.len() - 1) % MENUS.len();
        self.item = 0;
    }

    pub fn next_item(&mut self) {
        self.item = (self.item + 1) % self.items().len();
    }

    pub fn prev_item(&mut self) {
        let len = self.items().len();
        self.item = (self.item + len - 1) % len;
    }

    pub fn action(&self) -> MenuAction {
        self.items()[self.item].1
    }
}
