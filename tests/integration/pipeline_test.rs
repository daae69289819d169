//! End-to-end tests of the transcript pipeline on saved pages.

use chatmd::document::HtmlDocument;
use chatmd::files::markdown_filename;
use chatmd::transcript::{serialize, Assembler, Role};

use crate::helpers::{exported_at, fixture_path, load_fixture};

fn export(fixture: &str) -> String {
    let document = HtmlDocument::parse(&load_fixture(fixture));
    let conversation = Assembler::new().export_document(&document, fixture, None, exported_at());
    serialize(&conversation)
}

#[test]
fn primary_layout_transcript() {
    assert_eq!(
        export("primary_layout.html"),
        "# Sourdough Starter Help\n\
         \n\
         - **Source**: primary_layout.html\n\
         - **Exported at**: 2025-03-14 15:09\n\
         \n\
         ---\n\
         \n\
         ## User\n\
         \n\
         How often should I feed my starter?\n\
         \n\
         ---\n\
         \n\
         ## Assistant\n\
         \n\
         Once a day at room temperature.\n\
         \n\
         Use this ratio:\n\
         \n\
         1:1:1 starter:flour:water\n\
         \n\
         ---\n\
         \n\
         ## User\n\
         \n\
         And in the fridge?\n\
         \n\
         ---\n\
         \n\
         ## Assistant\n\
         \n\
         Once a week.\n\
         \n\
         ---\n"
    );
}

#[test]
fn turn_layout_uses_class_rules() {
    let document = HtmlDocument::parse(&load_fixture("turn_layout.html"));
    let conversation = Assembler::new().export_document(&document, "turn_layout.html", None, exported_at());

    assert_eq!(conversation.title(), "Trip Planning");
    let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);
    assert_eq!(conversation.messages()[1].content(), "Day one: Alfama.\n\nDay two: Belém.");
}

#[test]
fn article_layout_drops_blank_sections() {
    let document = HtmlDocument::parse(&load_fixture("article_layout.html"));
    let conversation = Assembler::new().export_document(&document, "article_layout.html", None, exported_at());

    // The <title> precedes the <h1> in document order.
    assert_eq!(conversation.title(), "Saved chat");
    let messages: Vec<(Role, &str)> = conversation
        .messages()
        .iter()
        .map(|m| (m.role(), m.content()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (Role::User, r"What does \d match?"),
            (Role::Assistant, "Any ASCII digit."),
        ]
    );
}

#[test]
fn page_without_messages_gives_header_only() {
    let markdown = export("empty_page.html");
    assert_eq!(
        markdown,
        "# ChatGPT Conversation\n\n- **Source**: empty_page.html\n- **Exported at**: 2025-03-14 15:09\n\n---\n"
    );
}

#[test]
fn code_fences_cannot_escape_the_transcript() {
    let markdown = export("code_fences.html");

    assert!(!markdown.contains("```"));
    assert!(markdown.contains("## Assistant\n\n`` `rust\nfn main() {}\n`` `\n\n---\n"));
    assert!(markdown.contains("## System\n\nCustom instructions applied\n\n---\n"));
}

#[test]
fn code_fence_title_becomes_safe_filename() {
    let document = HtmlDocument::load(&fixture_path("code_fences.html")).unwrap();
    let conversation = Assembler::new().export_document(&document, "code_fences.html", None, exported_at());

    assert_eq!(conversation.title(), "Fences: a/b test?");
    assert_eq!(markdown_filename(conversation.title()), "Fences- a-b test-.md");
}

#[test]
fn title_override_replaces_page_title() {
    let document = HtmlDocument::parse(&load_fixture("primary_layout.html"));
    let conversation =
        Assembler::new().export_document(&document, "x.html", Some("Bread Notes - ChatGPT"), exported_at());
    assert_eq!(conversation.title(), "Bread Notes");
}

#[test]
fn export_is_deterministic() {
    assert_eq!(export("primary_layout.html"), export("primary_layout.html"));
}
