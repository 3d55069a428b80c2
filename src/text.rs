// Whitespace handling shared by the scorer and the extractor.

/// Collapses every whitespace run (including no-break spaces) to a single
/// space and trims both ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Character count of `text` after [`collapse_whitespace`], without allocating.
///
/// `"  a   b "` has length 3.
pub(crate) fn text_length(text: &str) -> usize {
    let mut length = 0;
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = length > 0;
        } else {
            if pending_space {
                length += 1;
                pending_space = false;
            }
            length += 1;
        }
    }
    length
}

/// Returns true if the string is empty or all whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Number of whitespace-separated words.
pub(crate) fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
