//! Message content extraction.

use crate::document::{Node, Pattern};

/// Class of the container holding the rendered Markdown of a message.
pub const FORMATTED_CONTENT_CLASS: &str = "markdown";

/// Extracts the visible text of a message node.
///
/// Prefers the first nested formatted-content container, because the turn
/// node around it also carries avatars, buttons and other chrome.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    formatted: Pattern,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            formatted: Pattern::class(FORMATTED_CONTENT_CLASS),
        }
    }

    /// Raw rendered text, not yet normalized. May be empty.
    pub fn extract<N: Node>(&self, node: &N) -> String {
        match node.find_first(&self.formatted) {
            Some(formatted) => formatted.rendered_text(),
            None => node.rendered_text(),
        }
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, HtmlDocument};

    fn extract(html: &str) -> String {
        let doc = HtmlDocument::parse(html);
        let node = doc.select_all(&Pattern::attr_eq("id", "t")).remove(0);
        ContentExtractor::new().extract(&node)
    }

    #[test]
    fn prefers_markdown_container() {
        assert_eq!(
            extract(r#"<div id=t><span>ChatGPT said:</span><div class="markdown prose"><p>Answer</p></div></div>"#),
            "Answer"
        );
    }

    #[test]
    fn finds_deeply_nested_container() {
        assert_eq!(
            extract(r#"<div id=t><div><div><div class="markdown">deep</div></div></div><div class="markdown">second</div></div>"#),
            "deep"
        );
    }

    #[test]
    fn falls_back_to_node_text() {
        assert_eq!(extract("<div id=t><div>plain</div> text</div>"), "plain\ntext");
    }

    #[test]
    fn empty_container_yields_empty_text() {
        assert_eq!(extract(r#"<div id=t>outside<div class="markdown">   </div></div>"#), "");
    }
}
