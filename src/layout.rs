//! Greedy word-wrap of dialogue text into lines that fit a pixel budget
//!
//! The frontend supplies the measure function (a font knows how wide a string
//! renders); the algorithm itself is pure and deterministic.

/// Wrap `text` into lines no wider than `max_width` according to `measure`.
///
/// Explicit newlines are hard breaks: each paragraph wraps independently, and
/// an empty paragraph yields one empty output line. Blank lines between
/// dialogue and choices rely on that, so empties are never collapsed.
///
/// Within a paragraph, words accumulate greedily; when adding the next word
/// would exceed the budget the current line is emitted and the word starts a
/// fresh one. A single word wider than the budget is still emitted as its own
/// line: overflow is accepted, there is no character-level splitting.
pub fn wrap_text<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();

        let Some(first) = words.next() else {
            lines.push(String::new());
            continue;
        };

        let mut current = first.to_string();
        for word in words {
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    lines
}
