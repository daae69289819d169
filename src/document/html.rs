//! Static snapshot provider backed by `scraper`.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};

use super::{Child, Document, Node};
use crate::error::ExportError;

/// A parsed, immutable HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses an HTML document. Parsing is lenient and never fails.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Reads and parses an HTML file. Invalid UTF-8 sequences are replaced
    /// with U+FFFD rather than rejected.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        if !path.exists() {
            return Err(ExportError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

impl Document for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// An element of an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> Node for HtmlNode<'a> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlNode)
    }

    fn children(&self) -> Vec<Child<Self>> {
        self.0
            .children()
            .filter_map(|child| match child.value() {
                scraper::Node::Element(_) => ElementRef::wrap(child).map(|e| Child::Element(HtmlNode(e))),
                scraper::Node::Text(text) => Some(Child::Text((**text).to_owned())),
                _ => None,
            })
            .collect()
    }

    fn descendants(&self) -> Vec<Self> {
        self.0
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }

    fn text_content(&self) -> String {
        self.0.text().collect()
    }
}
