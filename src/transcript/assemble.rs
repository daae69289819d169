//! Conversation assembly: the pipeline from document to [`Conversation`].

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use super::content::ContentExtractor;
use super::role::RoleClassifier;
use super::selector::NodeSelector;
use super::types::{Conversation, Message};
use crate::config::ExportConfig;
use crate::document::{Document, Node};
use crate::title::{resolve_title, DEFAULT_PRODUCT};

/// Classifies, extracts and orders message nodes into a conversation.
#[derive(Debug, Clone)]
pub struct Assembler {
    selector: NodeSelector,
    classifier: RoleClassifier,
    extractor: ContentExtractor,
    product: String,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            selector: NodeSelector::new(),
            classifier: RoleClassifier::new(),
            extractor: ContentExtractor::new(),
            product: DEFAULT_PRODUCT.to_string(),
        }
    }

    /// Builds an assembler honoring the `[export]` configuration.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            classifier: RoleClassifier::with_text_heuristic(config.text_prefix_heuristic),
            product: config.product_name.clone(),
            ..Self::new()
        }
    }

    pub fn with_classifier(mut self, classifier: RoleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_selector(mut self, selector: NodeSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Turns candidate nodes into messages, dropping empty ones.
    pub fn messages<N: Node>(&self, nodes: &[N]) -> Vec<Message> {
        let messages: Vec<Message> = nodes
            .iter()
            .filter_map(|node| {
                let raw = self.extractor.extract(node);
                Message::new(self.classifier.classify(node), &raw)
            })
            .collect();
        debug!(
            candidates = nodes.len(),
            kept = messages.len(),
            dropped = nodes.len() - messages.len(),
            "assembled messages"
        );
        messages
    }

    /// Assembles a conversation stamped with the current local time.
    pub fn assemble<N: Node>(&self, title: Option<&str>, source: &str, nodes: &[N]) -> Conversation {
        self.assemble_at(title, source, nodes, Local::now().naive_local())
    }

    /// Assembles a conversation stamped with `exported_at`.
    pub fn assemble_at<N: Node>(
        &self,
        title: Option<&str>,
        source: &str,
        nodes: &[N],
        exported_at: NaiveDateTime,
    ) -> Conversation {
        let title = resolve_title(title, &self.product);
        Conversation::new(title, source, exported_at, self.messages(nodes))
    }

    /// Runs the whole pipeline over a document.
    ///
    /// `title_override` replaces the document's own title lookup.
    pub fn export_document<D: Document>(
        &self,
        document: &D,
        source: &str,
        title_override: Option<&str>,
        exported_at: NaiveDateTime,
    ) -> Conversation {
        let nodes = self.selector.select(document);
        let title = match title_override {
            Some(title) => Some(title.to_string()),
            None => document.title(),
        };
        self.assemble_at(title.as_deref(), source, &nodes, exported_at)
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
