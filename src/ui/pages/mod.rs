pub mod chapters;
pub mod home;
pub mod lore;
pub mod reader;

/// Truncate preview text to `max` characters, ending with an ellipsis
/// when anything was cut.
pub(crate) fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated() {
        assert_eq!(truncated("short", 10), "short");
        let long = truncated("a much longer piece of text", 10);
        assert_eq!(long.chars().count(), 10);
        assert!(long.ends_with('\u{2026}'));
    }

    #[test]
    fn test_truncated_counts_chars_not_bytes() {
        let text = "d\u{e9}j\u{e0} vu all over again";
        let cut = truncated(text, 8);
        assert_eq!(cut.chars().count(), 8);
        assert!(cut.ends_with('\u{2026}'));
    }
}
