//! Utility functions for char-addressed text
//!
//! Every offset in this crate counts Unicode scalar values, not bytes.

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `char_idx`, clamped to the end of `text`
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Slice `text` by character range `start..end`.
///
/// Out-of-range bounds are clamped, and an inverted range yields `""`.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end);
    &text[start_byte..end_byte]
}

/// Slice `text` from character `start` to the end
pub fn char_slice_from(text: &str, start: usize) -> &str {
    &text[byte_offset(text, start)..]
}

/// Char index of the last occurrence of `needle` that starts at or before
/// char index `from`. Overlapping occurrences are considered.
pub fn last_index_of(text: &str, needle: &str, from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(char_len(text)));
    }
    text.char_indices()
        .enumerate()
        .take_while(|(char_idx, _)| *char_idx <= from)
        .filter(|(_, (byte, _))| text[*byte..].starts_with(needle))
        .map(|(char_idx, _)| char_idx)
        .last()
}

/// Whether a trigger may start right after `text`: true for empty text or text
/// ending in whitespace (including line breaks)
pub fn accepts_trigger_after(text: &str) -> bool {
    text.chars().next_back().map_or(true, char::is_whitespace)
}
