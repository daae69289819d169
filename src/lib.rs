//! chatmd - Markdown transcripts from chat pages.
//!
//! A saved or live conversation page is a tree of elements whose shape
//! changes from one product release to the next. This crate finds the
//! message nodes in such a tree, works out who said what, and writes a
//! deterministic Markdown transcript.
//!
//! # Example
//!
//! ```
//! use chatmd::document::HtmlDocument;
//! use chatmd::Document;
//! use chatmd::transcript::{serialize, Assembler};
//!
//! let page = HtmlDocument::parse(
//!     r#"<title>Greetings - ChatGPT</title>
//!        <div data-message-author-role="user">Hi!</div>
//!        <div data-message-author-role="assistant"><div class="markdown">Hello.</div></div>"#,
//! );
//! let conversation = Assembler::new().assemble(page.title().as_deref(), "page.html", &chatmd::select(&page));
//! let markdown = serialize(&conversation);
//! assert!(markdown.starts_with("# Greetings\n"));
//! assert!(markdown.contains("## User\n\nHi!\n"));
//! ```
//!
//! # Module Structure
//!
//! - [`document`] - Tree capability traits and the HTML snapshot provider
//! - [`transcript`] - Selection, roles, extraction, normalization, Markdown
//! - [`live`] - Mutable session tree and export trigger
//! - [`files`] - File names and output writing
//! - [`title`] - Title suffix stripping and placeholder
//! - [`config`] - Configuration file
//! - [`cli`] - Command-line definitions

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod files;
pub mod live;
pub mod title;
pub mod transcript;

pub use config::Config;
pub use document::{Document, Node};
pub use error::{ConfigError, ExportError};

/// Candidate message nodes of `document`, using the default patterns.
pub fn select<D: Document>(document: &D) -> Vec<D::Node<'_>> {
    transcript::NodeSelector::new().select(document)
}
