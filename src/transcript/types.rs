//! Data structures for assembled transcripts.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use super::normalize::normalize;

/// Format of the `Exported at` header field.
pub const EXPORTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Speaker of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
            Self::System => "System",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message of a conversation. Content is normalized and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Normalizes `raw` and builds a message, or `None` if nothing is left.
    pub fn new(role: Role, raw: &str) -> Option<Self> {
        let content = normalize(raw);
        if content.is_empty() {
            None
        } else {
            Some(Self { role, content })
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A fully assembled conversation, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    title: String,
    source: String,
    exported_at: NaiveDateTime,
    messages: Vec<Message>,
}

impl Conversation {
    /// `exported_at` is truncated to whole minutes.
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        exported_at: NaiveDateTime,
        messages: Vec<Message>,
    ) -> Self {
        let exported_at = exported_at
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(exported_at);
        Self {
            title: title.into(),
            source: source.into(),
            exported_at,
            messages,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn exported_at(&self) -> NaiveDateTime {
        self.exported_at
    }

    /// `YYYY-MM-DD HH:MM`
    pub fn exported_at_display(&self) -> String {
        self.exported_at.format(EXPORTED_AT_FORMAT).to_string()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
