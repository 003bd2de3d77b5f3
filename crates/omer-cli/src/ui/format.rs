//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Keep the end of a string (paths), prefixing an ellipsis if shortened.
pub fn truncate_left(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().skip(char_count - max_len).collect();
    }
    let tail: String = s.chars().skip(char_count - (max_len - 3)).collect();
    format!("...{}", tail)
}

/// Wrap text to a given width, preserving newlines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Pesach Sheni", 20), "Pesach Sheni");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("Hillula of Rabbi Shimon", 10), "Hillula...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let hebrew = "לַג בָּעֹמֶר";
        assert_eq!(truncate(hebrew, 100), hebrew);
        assert_eq!(truncate(hebrew, 5).chars().count(), 5);
    }

    #[test]
    fn test_truncate_left() {
        assert_eq!(
            truncate_left("/home/user/.config/omer/config.toml", 20),
            ".../omer/config.toml"
        );
        assert_eq!(truncate_left("short", 20), "short");
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap("hello world foo bar", 10);
        assert_eq!(lines, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap("hello\n\nworld", 20);
        assert_eq!(lines, vec!["hello", "", "world"]);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
        assert_eq!(single_line("no newlines"), "no newlines");
    }
}
