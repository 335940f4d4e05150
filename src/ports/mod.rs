// src/ports/mod.rs
pub mod text;
pub mod tui;

pub use text::TextPresenter;
