//! Word cap for composer details.

pub const MAX_COMPOSE_WORDS: usize = 200;

/// Cap `text` at `max` whitespace-separated words.
///
/// Returns the text to keep and its word count. Text within the cap is
/// returned untouched; longer text is truncated and re-joined with single
/// spaces. Blank input becomes empty.
pub fn limit_words(text: &str, max: usize) -> (String, usize) {
    if text.trim().is_empty() {
        return (String::new(), 0);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max {
        return (words[..max].join(" "), max);
    }
    (text.to_string(), words.len())
}
