//! Markdown rendering of a conversation.

use super::types::Conversation;

/// Horizontal rule closing the header and every message.
const SEPARATOR: &str = "---";

/// Renders `conversation` with the fixed transcript template.
///
/// The output always ends with `---\n`. Message content is expected to be
/// normalized already, so it cannot open or close a code fence.
pub fn serialize(conversation: &Conversation) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(7 + conversation.messages().len() * 6);

    lines.push(format!("# {}", conversation.title()));
    lines.push(String::new());
    lines.push(format!("- **Source**: {}", conversation.source()));
    lines.push(format!("- **Exported at**: {}", conversation.exported_at_display()));
    lines.push(String::new());
    lines.push(SEPARATOR.to_string());
    lines.push(String::new());

    for message in conversation.messages() {
        lines.push(format!("## {}", message.role()));
        lines.push(String::new());
        lines.push(message.content().to_string());
        lines.push(String::new());
        lines.push(SEPARATOR.to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}
