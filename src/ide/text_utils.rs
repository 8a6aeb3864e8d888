//! Identifier extraction from a line of source text.

/// Check if a character can appear in an identifier.
///
/// Ink names are ASCII in practice, but editors may hand us any text, so the
/// Unicode identifier rules are used to find word edges.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of the word at `position`.
///
/// Returns `Some((start, end))` in character indices with `end` exclusive, or
/// `None` when `position` is not on a word character.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word under the cursor.
///
/// A cursor sitting just past the last character of a word still selects
/// that word, which is where editors put it after typing a name.
///
/// # Example
/// ```
/// use inkmap::ide::text_utils::extract_word_at_cursor;
///
/// let line = "Go -> knotB";
/// assert_eq!(extract_word_at_cursor(line, 7), Some("knotB".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 11), Some("knotB".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 3), None);
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();

    let (start, end) = find_word_boundaries(&chars, position).or_else(|| {
        position
            .checked_sub(1)
            .and_then(|before| find_word_boundaries(&chars, before))
    })?;

    Some(chars[start..end].iter().collect())
}
