// src/util/text.rs

/// Keep at most `max` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
///
/// # Examples
///
/// ```
/// use noteapp::util::text::truncate_chars;
///
/// assert_eq!(truncate_chars("Groceries", 4), "Groc");
/// assert_eq!(truncate_chars("Дом", 10), "Дом");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Number of characters (not bytes) in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_text_when_truncating_then_returns_unchanged() {
        assert_eq!(truncate_chars("short", 50), "short");
    }

    #[test]
    fn given_exact_length_when_truncating_then_returns_unchanged() {
        let text = "a".repeat(50);
        assert_eq!(truncate_chars(&text, 50), text);
    }

    #[test]
    fn given_long_text_when_truncating_then_keeps_prefix() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn given_multibyte_text_when_truncating_then_splits_on_char_boundary() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }

    #[test]
    fn given_empty_text_when_truncating_then_returns_empty() {
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn given_multibyte_text_when_counting_then_counts_chars() {
        assert_eq!(char_len("Здоровье"), 8);
    }
}
