//! Transcript extraction and serialization pipeline.
//!
//! Turns a conversation page into a Markdown transcript. The pipeline is
//! synchronous, holds no state between runs, and works against any
//! [`Document`](crate::document::Document) implementation, so the static
//! HTML snapshot and the live session share every step.
//!
//! # Module Structure
//!
//! - [`selector`] - Candidate message node selection with fallbacks
//! - [`role`] - Ordered speaker role rules
//! - [`content`] - Visible message text extraction
//! - [`normalize`] - Line ending, blank line and code fence cleanup
//! - [`assemble`] - Pipeline orchestration into a [`Conversation`]
//! - [`markdown`] - Fixed Markdown template
//! - [`types`] - Roles, messages and conversations

pub mod assemble;
pub mod content;
pub mod markdown;
pub mod normalize;
pub mod role;
pub mod selector;
pub mod types;

pub use assemble::Assembler;
pub use content::ContentExtractor;
pub use markdown::serialize;
pub use normalize::normalize;
pub use role::{RoleClassifier, RoleRule, RoleSignals};
pub use selector::NodeSelector;
pub use types::{Conversation, Message, Role, EXPORTED_AT_FORMAT};
