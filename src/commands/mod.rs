//! Subcommand handlers for the chatmd binary.

pub mod completions;
pub mod config;
pub mod convert;
