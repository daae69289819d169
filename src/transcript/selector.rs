//! Candidate message node selection.

use tracing::debug;

use crate::document::{Document, Pattern};

/// Attribute carrying the author role of a conversation turn.
pub const AUTHOR_ROLE_ATTR: &str = "data-message-author-role";

/// Finds candidate message nodes, trying patterns in a fixed priority order.
#[derive(Debug, Clone)]
pub struct NodeSelector {
    patterns: Vec<Pattern>,
}

impl NodeSelector {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Pattern::has_attr(Some("div"), AUTHOR_ROLE_ATTR),
                Pattern::attr_eq("data-testid", "conversation-turn"),
                Pattern::any(vec![Pattern::tag("article"), Pattern::tag("section")]),
            ],
        }
    }

    /// Create with specific patterns (for testing).
    pub fn with_patterns(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the nodes of the first pattern that matches anything.
    ///
    /// An empty result is valid: it yields an empty conversation.
    pub fn select<'d, D: Document>(&self, document: &'d D) -> Vec<D::Node<'d>> {
        for (priority, pattern) in self.patterns.iter().enumerate() {
            let nodes = document.select_all(pattern);
            if !nodes.is_empty() {
                debug!(
                    pattern = %pattern,
                    priority,
                    count = nodes.len(),
                    "selected candidate message nodes"
                );
                return nodes;
            }
        }
        debug!("no candidate message nodes found");
        Vec::new()
    }
}

impl Default for NodeSelector {
    fn default() -> Self {
        Self::new()
    }
}
