//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps list output bounded and readable while preserving signal.

/// Collapse whitespace and bound length for terminal display.
///
/// Truncation happens at a word boundary so a principle description is never
/// cut mid-word; a single word longer than the budget is hard-cut instead.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut preview = String::new();
    let mut len = 0;
    for word in &words {
        let word_len = word.chars().count();
        let next = if preview.is_empty() { word_len } else { len + 1 + word_len };
        if next > max_chars {
            break;
        }
        if !preview.is_empty() {
            preview.push(' ');
        }
        preview.push_str(word);
        len = next;
    }
    if preview.is_empty() {
        preview = collapsed.chars().take(max_chars).collect();
    }
    format!("{}...", preview)
}
