//! Filename sanitization for exported transcripts.
//!
//! Conversation titles are free text; before one becomes a file name every
//! character that common filesystems reject is replaced and the length is
//! capped.

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replacement for each invalid character.
const REPLACEMENT: char = '-';

/// Default fallback name when sanitization produces an empty result.
pub const FALLBACK_NAME: &str = "conversation";

/// Maximum length of a sanitized name, in characters.
pub const MAX_NAME_LENGTH: usize = 80;

/// Extension of exported transcripts.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Sanitizes a string for use in filenames.
///
/// Applies the following transformations in order:
/// 1. Invalid filesystem characters → `-`
/// 2. Truncation to the first 80 characters
/// 3. Leading/trailing whitespace trimmed
/// 4. Empty results → "conversation" fallback
pub fn sanitize(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { REPLACEMENT } else { c })
        .collect();

    let truncated = truncate_to_length(&replaced, MAX_NAME_LENGTH);
    let trimmed = truncated.trim();

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<sanitized title>.md`
pub fn markdown_filename(title: &str) -> String {
    format!("{}.{}", sanitize(title), MARKDOWN_EXTENSION)
}

/// Truncates a string to the specified number of characters.
fn truncate_to_length(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}
