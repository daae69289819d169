//! `chatmd convert` handler.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use chatmd::cli::ConvertArgs;
use chatmd::document::HtmlDocument;
use chatmd::files::{resolve_output_path, write_markdown};
use chatmd::transcript::{serialize, Assembler};
use chatmd::Config;

/// Convert one saved page and write (or print) the transcript.
pub fn handle(args: &ConvertArgs, config: &Config) -> Result<()> {
    let document = HtmlDocument::load(&args.input)?;
    let source = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    let conversation = Assembler::from_config(&config.export).export_document(
        &document,
        &source,
        args.title.as_deref(),
        Local::now().naive_local(),
    );
    info!(
        title = conversation.title(),
        messages = conversation.messages().len(),
        "extracted conversation"
    );
    let markdown = serialize(&conversation);

    if args.stdout {
        print!("{}", markdown);
        return Ok(());
    }

    let output_dir = args
        .output_dir
        .as_deref()
        .or(config.export.output_dir.as_deref());
    let path = resolve_output_path(args.output.as_deref(), output_dir, conversation.title());
    write_markdown(&path, &markdown)
        .with_context(|| format!("Could not save the export of {}", args.input.display()))?;

    println!("Markdown export generated: {}", path.display());
    Ok(())
}
