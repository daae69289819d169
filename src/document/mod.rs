//! Document tree capability interface.
//!
//! The transcript pipeline never touches a concrete tree. It works against
//! the [`Node`] and [`Document`] traits, which both tree providers implement:
//!
//! - [`html`] - an immutable snapshot parsed from an HTML file
//! - [`crate::live`] - a mutable in-memory tree inside an interactive session
//!
//! # Module Structure
//!
//! - [`pattern`] - Structural queries used to locate nodes
//! - [`render`] - Visible-text approximation shared by both providers
//! - [`html`] - `scraper`-backed snapshot provider

pub mod html;
pub mod pattern;
pub mod render;

pub use html::{HtmlDocument, HtmlNode};
pub use pattern::Pattern;

/// A direct child of an element: either another element or a text run.
#[derive(Debug, Clone)]
pub enum Child<N> {
    Element(N),
    Text(String),
}

/// Handle to one element of a document tree.
///
/// Implementors only provide the primitive accessors; traversal, pattern
/// search and text rendering are derived from them.
pub trait Node: Clone {
    /// Lowercase tag name (`div`, `article`, ...).
    fn tag_name(&self) -> &str;

    /// Attribute value by name.
    fn attr(&self, name: &str) -> Option<String>;

    /// All attributes as `(name, value)` pairs.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Parent element, `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Direct children in document order. Comments are omitted.
    fn children(&self) -> Vec<Child<Self>>;

    /// Whether the whitespace-separated `class` attribute contains `class`.
    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// All descendant elements in document (pre-)order, excluding `self`.
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// First descendant matching `pattern`, in document order.
    fn find_first(&self, pattern: &Pattern) -> Option<Self> {
        self.descendants().into_iter().find(|n| pattern.matches(n))
    }

    /// Concatenation of every descendant text run, verbatim.
    fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Human-visible text of the subtree (see [`render::rendered_text`]).
    fn rendered_text(&self) -> String {
        render::rendered_text(self)
    }
}

/// Pre-order walk with an explicit stack, so nesting depth is unbounded.
fn collect_descendants<N: Node>(node: &N, out: &mut Vec<N>) {
    let mut stack = child_elements_reversed(node);
    while let Some(element) = stack.pop() {
        stack.extend(child_elements_reversed(&element));
        out.push(element);
    }
}

fn child_elements_reversed<N: Node>(node: &N) -> Vec<N> {
    let mut elements: Vec<N> = node
        .children()
        .into_iter()
        .filter_map(|child| match child {
            Child::Element(element) => Some(element),
            Child::Text(_) => None,
        })
        .collect();
    elements.reverse();
    elements
}

fn collect_text<N: Node>(node: &N, out: &mut String) {
    let mut stack: Vec<Child<N>> = node.children().into_iter().rev().collect();
    while let Some(child) = stack.pop() {
        match child {
            Child::Element(element) => stack.extend(element.children().into_iter().rev()),
            Child::Text(text) => out.push_str(&text),
        }
    }
}

/// Trims and collapses every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn heading_patterns() -> Vec<Pattern> {
    vec![
        Pattern::tag("h1"),
        Pattern::within(Pattern::tag("header"), Pattern::tag("h1")),
        Pattern::attr_eq("data-testid", "conversation-title"),
    ]
}

/// Visible conversation heading.
pub fn heading_pattern() -> Pattern {
    Pattern::any(heading_patterns())
}

/// Heading or `<title>`; the first match in document order wins.
pub fn title_pattern() -> Pattern {
    let mut patterns = heading_patterns();
    patterns.push(Pattern::tag("title"));
    Pattern::any(patterns)
}

/// A whole document tree.
pub trait Document {
    type Node<'a>: Node
    where
        Self: 'a;

    /// The root element (`<html>`).
    fn root(&self) -> Self::Node<'_>;

    /// Every element matching `pattern`, root included, in document order.
    fn select_all(&self, pattern: &Pattern) -> Vec<Self::Node<'_>> {
        let root = self.root();
        let mut nodes = Vec::new();
        if pattern.matches(&root) {
            nodes.push(root.clone());
        }
        nodes.extend(root.descendants().into_iter().filter(|n| pattern.matches(n)));
        nodes
    }

    /// Best available human-readable title on a single line; `None` when
    /// blank.
    ///
    /// Takes the first element matching [`title_pattern`], even when an
    /// element further down would carry more text.
    fn title(&self) -> Option<String> {
        let first = self.select_all(&title_pattern()).into_iter().next()?;
        let text = collapse_whitespace(&first.text_content());
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> HtmlDocument {
        HtmlDocument::parse(html)
    }

    #[test]
    fn descendants_are_in_document_order() {
        let d = doc("<div id=a><p id=b><span id=c></span></p><p id=d></p></div>");
        let root = d.select_all(&Pattern::attr_eq("id", "a")).remove(0);
        let ids: Vec<_> = root
            .descendants()
            .iter()
            .filter_map(|n| n.attr("id"))
            .collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }

    #[test]
    fn find_first_excludes_self() {
        let d = doc(r#"<div class="markdown" id=outer><div class="markdown" id=inner></div></div>"#);
        let outer = d.select_all(&Pattern::attr_eq("id", "outer")).remove(0);
        let found = outer.find_first(&Pattern::class("markdown")).unwrap();
        assert_eq!(found.attr("id").as_deref(), Some("inner"));
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let d = doc(r#"<div id=x class="markdown-body prose"></div>"#);
        let node = d.select_all(&Pattern::attr_eq("id", "x")).remove(0);
        assert!(node.has_class("prose"));
        assert!(!node.has_class("markdown"));
    }

    #[test]
    fn title_prefers_first_match_in_document_order() {
        let d = doc("<html><head><title>Tab Title</title></head><body><h1>Heading</h1></body></html>");
        assert_eq!(d.title().as_deref(), Some("Tab Title"));
    }

    #[test]
    fn multi_line_heading_becomes_one_line() {
        let d = doc("<body><h1>  My\n   Chat\tNotes </h1></body>");
        assert_eq!(d.title().as_deref(), Some("My Chat Notes"));
    }

    #[test]
    fn deep_nesting_is_walked_without_recursion() {
        let depth = 50_000;
        let html = format!(
            "<div id=top>{}deep{}</div>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        let d = doc(&html);
        let top = d.select_all(&Pattern::attr_eq("id", "top")).remove(0);
        assert_eq!(top.descendants().len(), depth);
        assert_eq!(top.text_content(), "deep");
        assert_eq!(top.rendered_text(), "deep");
    }

    #[test]
    fn title_is_none_when_blank() {
        let d = doc("<html><head><title>   </title></head><body></body></html>");
        assert_eq!(d.title(), None);
    }
}
