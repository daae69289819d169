//! The live session front end produces the same transcript as a snapshot.

use std::rc::Rc;

use chatmd::document::{HtmlDocument, Pattern};
use chatmd::live::{DirectorySink, Element, ExportTrigger, LiveSession, MemorySink};
use chatmd::transcript::{serialize, Assembler};
use chatmd::Document;
use tempfile::TempDir;

use crate::helpers::{exported_at, load_fixture};

const URL: &str = "https://chat.example/c/42";

#[test]
fn live_and_static_exports_match() {
    let html = load_fixture("primary_layout.html");

    let document = HtmlDocument::parse(&html);
    let expected = serialize(&Assembler::new().export_document(&document, URL, None, exported_at()));

    let session = LiveSession::from_html(URL, &html);
    let trigger = ExportTrigger::default();
    trigger.install(&session);
    let sink = MemorySink::new();
    let filename = trigger.activate_at(&session, &sink, exported_at()).unwrap();

    assert_eq!(filename, "Sourdough Starter Help.md");
    assert_eq!(sink.last().unwrap().contents, expected);
}

#[test]
fn installed_button_is_not_a_message() {
    let session = LiveSession::from_html(URL, &load_fixture("article_layout.html"));
    ExportTrigger::default().install(&session);

    let conversation = Assembler::new().export_document(&session, URL, None, exported_at());
    assert!(conversation
        .messages()
        .iter()
        .all(|m| !m.content().contains("Export .md")));
    // The live title prefers the visible heading.
    assert_eq!(conversation.title(), "Regex Questions");
}

#[test]
fn messages_added_after_attach_are_exported() {
    let session = LiveSession::from_html(URL, &load_fixture("primary_layout.html"));
    let trigger = Rc::new(ExportTrigger::default());
    trigger.attach(&session);

    session.mutate(|root| {
        let main = root.query(&Pattern::tag("main")).unwrap();
        main.append_child(
            &Element::new("div")
                .with_attr("data-message-author-role", "user")
                .with_text("Thanks!"),
        );
    });

    let sink = MemorySink::new();
    trigger.activate_at(&session, &sink, exported_at()).unwrap();
    assert!(sink
        .last()
        .unwrap()
        .contents
        .ends_with("## User\n\nThanks!\n\n---\n"));
}

#[test]
fn directory_sink_saves_named_file() {
    let dir = TempDir::new().unwrap();
    let session = LiveSession::from_html(URL, &load_fixture("turn_layout.html"));
    let trigger = ExportTrigger::default();

    trigger
        .activate_at(&session, &DirectorySink::new(dir.path()), exported_at())
        .unwrap();

    let saved = std::fs::read_to_string(dir.path().join("Trip Planning.md")).unwrap();
    assert!(saved.starts_with("# Trip Planning\n\n- **Source**: https://chat.example/c/42\n"));
    assert_eq!(session.title().as_deref(), Some("Trip Planning - ChatGPT"));
}
