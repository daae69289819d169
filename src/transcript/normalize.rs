//! Text normalization for extracted message content.
//!
//! Cleans rendered text so it drops safely into the Markdown template:
//!
//! 1. `\r\n` and lone `\r` become `\n`
//! 2. Whitespace-only lines are emptied and blank lines capped at one
//! 3. The whole text is trimmed
//! 4. Backtick runs of three or more are split so no code fence survives
//!
//! Every step is idempotent and none undoes another, so
//! `normalize(normalize(x)) == normalize(x)`.

/// Maximum consecutive newlines kept (one blank line).
const MAX_CONSECUTIVE_NEWLINES: usize = 2;

/// Normalizes raw extracted text.
pub fn normalize(raw: &str) -> String {
    let unified = unify_line_endings(raw);
    let collapsed = collapse_blank_lines(&unified, MAX_CONSECUTIVE_NEWLINES);
    escape_code_fences(collapsed.trim())
}

/// Converts every line-ending variant to `\n`.
pub fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Empties whitespace-only lines and limits consecutive newlines.
pub fn collapse_blank_lines(text: &str, max_consecutive_newlines: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newline_count = 0;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            newline_count += 1;
            if newline_count <= max_consecutive_newlines {
                result.push('\n');
            }
        }
        if !line.trim().is_empty() {
            result.push_str(line);
            newline_count = 0;
        }
    }
    result
}

/// Splits every run of three or more backticks by inserting a space after
/// each pair: `` ``` `` becomes `` `` ` ``.
pub fn escape_code_fences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '`' {
            result.push(c);
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&'`') {
            chars.next();
            run += 1;
        }
        if run < 3 {
            result.extend(std::iter::repeat('`').take(run));
            continue;
        }
        for i in 0..run {
            if i > 0 && i % 2 == 0 {
                result.push(' ');
            }
            result.push('`');
        }
    }
    result
}
