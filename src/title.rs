//! Conversation title resolution.
//!
//! Page titles usually carry the hosting product as a suffix
//! (`"My Chat - ChatGPT"`); that suffix and everything after it is dropped.

/// Hosting product stripped from titles by default.
pub const DEFAULT_PRODUCT: &str = "ChatGPT";

/// Placeholder title when nothing usable is found.
pub fn placeholder(product: &str) -> String {
    format!("{} Conversation", product)
}

/// Removes `" - <product>"` and anything after it, case-insensitively.
pub fn strip_product_suffix<'a>(title: &'a str, product: &str) -> &'a str {
    if product.is_empty() {
        return title;
    }
    let needle = format!(" - {}", product).to_lowercase();
    match find_case_insensitive(title, &needle) {
        Some(pos) => &title[..pos],
        None => title,
    }
}

/// Byte offset of the first case-insensitive occurrence of a lowercase
/// `needle` in `haystack`.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        let mut rest = haystack[i..].chars().flat_map(char::to_lowercase);
        needle.chars().all(|n| rest.next() == Some(n))
    })
}

/// Final title: suffix stripped, trimmed, placeholder when blank.
pub fn resolve_title(raw: Option<&str>, product: &str) -> String {
    let stripped = raw
        .map(|t| strip_product_suffix(t, product).trim())
        .unwrap_or("");
    if stripped.is_empty() {
        placeholder(product)
    } else {
        stripped.to_string()
    }
}
