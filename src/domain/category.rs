// src/domain/category.rs
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Fixed set of subject areas a note can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Work,
    Home,
    Health,
    People,
    Documents,
    Finance,
    #[default]
    Misc,
}

impl Category {
    /// All categories in picker/display order.
    pub const ALL: [Category; 7] = [
        Category::Work,
        Category::Home,
        Category::Health,
        Category::People,
        Category::Documents,
        Category::Finance,
        Category::Misc,
    ];

    /// Human-readable label, also used as the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Home => "Home",
            Category::Health => "Health",
            Category::People => "People",
            Category::Documents => "Documents",
            Category::Finance => "Finance",
            Category::Misc => "Misc",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| DomainError::UnknownCategory(label.to_string()))
    }

    /// Next category in picker order, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in picker order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_every_category_when_mapping_label_back_then_returns_same_variant() {
        for category in Category::ALL {
            let parsed = Category::from_label(category.label()).expect("known label");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn given_unknown_label_when_parsing_then_returns_unknown_category() {
        let result = Category::from_label("Garden");
        assert!(matches!(result, Err(DomainError::UnknownCategory(l)) if l == "Garden"));
    }

    #[test]
    fn given_label_with_wrong_case_when_parsing_then_fails() {
        assert!("home".parse::<Category>().is_err());
    }

    #[test]
    fn given_default_when_constructing_then_is_misc() {
        assert_eq!(Category::default(), Category::Misc);
    }

    #[test]
    fn given_last_category_when_cycling_next_then_wraps_to_first() {
        assert_eq!(Category::Misc.next(), Category::Work);
        assert_eq!(Category::Work.prev(), Category::Misc);
        assert_eq!(Category::Home.next(), Category::Health);
    }
}
