//! Live session front end.
//!
//! Models an interactive page: a mutable element tree that keeps changing
//! while the user works, plus an export button that runs the transcript
//! pipeline against whatever the tree holds at the moment it is pressed.
//!
//! The pipeline sees the session only through the
//! [`Document`](crate::document::Document) trait, exactly like a static
//! snapshot.
//!
//! # Module Structure
//!
//! - [`tree`] - Shared, mutable elements
//! - [`session`] - The page, its URL and mutation observers
//! - [`trigger`] - Export button with install and in-flight guards
//! - [`download`] - Where finished exports are offered

pub mod download;
pub mod session;
pub mod tree;
pub mod trigger;

pub use download::{DirectorySink, Download, DownloadSink, MemorySink};
pub use session::{LiveSession, MutationObserver};
pub use tree::Element;
pub use trigger::{ExportTrigger, Notice, TriggerError};
