//! Caret helpers for text inputs.
//!
//! Cursor positions are counted in characters, never bytes, so callers can
//! move them around without worrying about UTF-8 boundaries.

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a cursor position to the length of `text`.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    cursor.min(char_len(text))
}
