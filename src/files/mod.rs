//! File naming and writing for exported transcripts.

pub mod filename;
pub mod output;

pub use filename::{markdown_filename, sanitize};
pub use output::{resolve_output_path, write_markdown};
