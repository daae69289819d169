//! Visible-text rendering.
//!
//! Approximates what a reader sees in a browser (`innerText`): hidden and
//! non-visual elements are skipped, whitespace collapses outside `pre`, and
//! block boundaries turn into line breaks.
//!
//! Breaks are tracked as a pending count rather than written eagerly, so
//! nested blocks (`<div><div><p>`) produce one break instead of a pile of
//! newlines, and breaks at the very start or end of the subtree vanish.

use super::{Child, Node};

/// Elements whose content is never visible.
const SKIPPED_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "svg", "title", "meta", "link",
];

/// Elements that start and end on their own line.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "details", "dialog", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "pre", "section", "summary", "table",
    "tbody", "thead", "tfoot", "tr", "ul", "caption",
];

/// Elements surrounded by a blank line.
const PARAGRAPH_TAGS: &[&str] = &["p"];

/// Table cells, separated by a tab within a row.
const CELL_TAGS: &[&str] = &["td", "th"];

/// Returns the human-visible text of `node`'s subtree.
pub fn rendered_text<N: Node>(node: &N) -> String {
    let mut renderer = Renderer::default();
    renderer.walk(node, node.tag_name() == "pre");
    renderer.out
}

fn is_hidden<N: Node>(node: &N) -> bool {
    if node.attr("hidden").is_some() {
        return true;
    }
    node.attr("style")
        .map(|style| {
            let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
            compact.to_ascii_lowercase().contains("display:none")
        })
        .unwrap_or(false)
}

fn is_rendered<N: Node>(node: &N) -> bool {
    !SKIPPED_TAGS.contains(&node.tag_name()) && !is_hidden(node)
}

/// Pending work of the tree walk.
enum Step<N> {
    Text { text: String, in_pre: bool },
    Open { element: N, in_pre: bool, tab: bool },
    Close { breaks: usize },
}

#[derive(Default)]
struct Renderer {
    out: String,
    pending_breaks: usize,
    pending_line_breaks: usize,
    pending_space: bool,
    pending_tab: bool,
}

impl Renderer {
    /// Walks the subtree with an explicit stack, so nesting depth is not
    /// bounded by the call stack.
    fn walk<N: Node>(&mut self, node: &N, in_pre: bool) {
        let mut stack = Vec::new();
        push_children(&mut stack, node, in_pre);

        while let Some(step) = stack.pop() {
            match step {
                Step::Text { text, in_pre: true } => self.push_verbatim(&text),
                Step::Text { text, in_pre: false } => self.push_collapsed(&text),
                Step::Close { breaks } => self.require_breaks(breaks),
                Step::Open { element, in_pre, tab } => {
                    let tag = element.tag_name();
                    if tag == "br" {
                        self.pending_space = false;
                        self.pending_line_breaks += 1;
                        continue;
                    }

                    let breaks = if PARAGRAPH_TAGS.contains(&tag) {
                        2
                    } else if BLOCK_TAGS.contains(&tag) {
                        1
                    } else {
                        0
                    };
                    if tab {
                        self.pending_tab = true;
                    }
                    self.require_breaks(breaks);

                    let in_pre = in_pre || tag == "pre";
                    stack.push(Step::Close { breaks });
                    push_children(&mut stack, &element, in_pre);
                }
            }
        }
    }

    fn require_breaks(&mut self, count: usize) {
        self.pending_breaks = self.pending_breaks.max(count);
    }

    /// Writes whatever separator is pending before the next visible character.
    fn flush(&mut self) {
        if !self.out.is_empty() {
            let breaks = self.pending_breaks.max(self.pending_line_breaks);
            if breaks > 0 {
                for _ in 0..breaks {
                    self.out.push('\n');
                }
            } else if self.pending_tab {
                self.out.push('\t');
            } else if self.pending_space && !self.out.ends_with('\n') {
                self.out.push(' ');
            }
        }
        self.pending_breaks = 0;
        self.pending_line_breaks = 0;
        self.pending_space = false;
        self.pending_tab = false;
    }

    fn push_collapsed(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.pending_space = true;
            } else {
                self.flush();
                self.out.push(c);
            }
        }
    }

    fn push_verbatim(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush();
        self.out.push_str(text);
    }
}

/// Queues the rendered children of `node` so they pop in document order.
fn push_children<N: Node>(stack: &mut Vec<Step<N>>, node: &N, in_pre: bool) {
    let mut steps = Vec::new();
    let mut first_cell = true;
    for child in node.children() {
        match child {
            Child::Text(text) => steps.push(Step::Text { text, in_pre }),
            Child::Element(element) if is_rendered(&element) => {
                let tab = CELL_TAGS.contains(&element.tag_name())
                    && !std::mem::replace(&mut first_cell, false);
                steps.push(Step::Open { element, in_pre, tab });
            }
            Child::Element(_) => {}
        }
    }
    stack.extend(steps.into_iter().rev());
}
