// Pure text helpers shared by validation, caching and rendering

pub const ELLIPSIS: &str = "...";

/// Lower-cased, trimmed lookup key for a destination name.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Only ASCII letters, whitespace and hyphens are accepted as search input.
pub fn is_well_formed(keyword: &str) -> bool {
    let trimmed = keyword.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
}

/// Collapse runs of whitespace into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_chars` characters and mark the cut with an ellipsis.
///
/// Counting is done on `char`s so multi-byte text is never split mid-character.
/// Text that already fits is returned unchanged (after whitespace collapsing).
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = collapse_whitespace(text);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Split long text into paragraphs of roughly `width` characters on word boundaries.
pub fn split_paragraphs(text: &str, width: usize) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            paragraphs.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  New York "), "new york");
        assert_eq!(normalize_key("PARIS"), "paris");
    }

    #[test]
    fn test_well_formed_input() {
        assert!(is_well_formed("Paris"));
        assert!(is_well_formed("  Saint-Tropez "));
        assert!(is_well_formed("New York"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("   "));
        assert!(!is_well_formed("Paris1"));
        assert!(!is_well_formed("Zürich"));
        assert!(!is_well_formed("Rome!"));
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_description("A small city.", 150), "A small city.");
    }

    #[test]
    fn test_exact_length_is_untouched() {
        let text = "a".repeat(150);
        assert_eq!(truncate_description(&text, 150), text);
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let text = "word ".repeat(60);
        let truncated = truncate_description(&text, 150);
        assert!(truncated.ends_with(ELLIPSIS));
        assert!(truncated.chars().count() <= 150 + ELLIPSIS.len());
        assert!(truncated.starts_with("word word"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "é".repeat(200);
        let truncated = truncate_description(&text, 150);
        assert_eq!(truncated.chars().count(), 153);
    }

    #[test]
    fn test_whitespace_is_collapsed_before_counting() {
        assert_eq!(truncate_description("Paris \n\n is   big", 150), "Paris is big");
    }

    #[test]
    fn test_split_paragraphs() {
        let text = "alpha beta gamma delta";
        let paragraphs = split_paragraphs(text, 11);
        assert_eq!(paragraphs, vec!["alpha beta", "gamma delta"]);
        assert!(split_paragraphs("", 300).is_empty());
    }
}
