//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("CHATMD_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CHATMD_BUILD_DATE"),
    ")"
);

/// Convert saved chat pages into Markdown transcripts.
#[derive(Parser, Debug)]
#[command(
    name = "chatmd",
    version,
    long_version = LONG_VERSION,
    about = "Convert saved chat pages into Markdown transcripts",
    propagate_version = true
)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a saved conversation page (HTML) to Markdown
    Convert(ConvertArgs),

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Saved conversation page
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <title>.md in the output directory)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Directory for the derived output file
    #[arg(long, value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Use this title instead of the one found in the page
    #[arg(long)]
    pub title: Option<String>,

    /// Print the Markdown instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "output_dir"])]
    pub stdout: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
