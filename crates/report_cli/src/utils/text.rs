/// Marker appended to every text preview
pub const ELLIPSIS: &str = "...";

/// Return at most the first `width` characters of `text`
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn preview(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Return the last `count` items of `items`, preserving their order
pub fn tail<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "r".repeat(150);
        assert_eq!(preview(&text, 100), "r".repeat(100));
    }

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview(&"x".repeat(100), 100), "x".repeat(100));
        assert_eq!(preview("", 100), "");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(preview(&text, 3), "ééé");
        assert_eq!(preview("日本語のテキスト", 3), "日本語");
    }

    #[test]
    fn test_preview_zero_width() {
        assert_eq!(preview("anything", 0), "");
    }

    #[test]
    fn test_tail() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(tail(&items, 3), &[3, 4, 5]);
        assert_eq!(tail(&items, 10), &items);
        assert_eq!(tail(&items, 0), &[] as &[i32]);
        assert_eq!(tail::<i32>(&[], 3), &[] as &[i32]);
    }
}
