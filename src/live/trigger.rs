//! The interactive export trigger.
//!
//! Installs a single "Export .md" button into the live page and runs the
//! transcript pipeline when it is activated. Pages re-render freely, so
//! [`ExportTrigger::attach`] re-installs the button whenever a mutation
//! removed it; installation is a no-op while the button is present.
//!
//! Activation never fails loudly: errors are logged and come back as a
//! [`Notice`] for the user, and the trigger stays usable for a retry.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use super::download::DownloadSink;
use super::session::LiveSession;
use super::tree::Element;
use crate::document::{Document, Node, Pattern};
use crate::files::markdown_filename;
use crate::transcript::{serialize, Assembler};

/// Id of the installed button; its presence marks the trigger as installed.
pub const TRIGGER_ID: &str = "export-md-btn";

/// Button label while idle.
pub const IDLE_LABEL: &str = "Export .md";

/// Button label while an export runs.
pub const BUSY_LABEL: &str = "Exporting...";

/// Notice shown when an export fails.
pub const FAILURE_NOTICE: &str = "Markdown export failed. Check the log for details.";

/// Notice shown when the button is activated during an export.
pub const BUSY_NOTICE: &str = "An export is already in progress.";

/// Errors caught at the trigger boundary.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("an export is already in progress")]
    InFlight,

    #[error("download failed: {0}")]
    Download(#[from] std::io::Error),
}

/// A user-visible, non-fatal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl From<&TriggerError> for Notice {
    fn from(err: &TriggerError) -> Self {
        let message = match err {
            TriggerError::InFlight => BUSY_NOTICE,
            TriggerError::Download(_) => FAILURE_NOTICE,
        };
        Self {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Export button for a [`LiveSession`].
#[derive(Debug, Default)]
pub struct ExportTrigger {
    assembler: Assembler,
    in_flight: Cell<bool>,
}

impl ExportTrigger {
    pub fn new(assembler: Assembler) -> Self {
        Self {
            assembler,
            in_flight: Cell::new(false),
        }
    }

    /// Whether the button is currently in `session`'s tree.
    pub fn is_installed(&self, session: &LiveSession) -> bool {
        session.root().get_element_by_id(TRIGGER_ID).is_some()
    }

    /// Adds the button to the page header (or body). Returns `false` if it
    /// was already present.
    pub fn install(&self, session: &LiveSession) -> bool {
        if self.is_installed(session) {
            return false;
        }
        let root = session.root();
        let container = root
            .query(&Pattern::tag("header"))
            .or_else(|| root.query(&Pattern::attr_eq("data-testid", "header")))
            .or_else(|| session.body())
            .unwrap_or(root);
        let button = Element::new("button")
            .with_attr("id", TRIGGER_ID)
            .with_attr("type", "button")
            .with_text(IDLE_LABEL);
        container.append_child(&button);
        info!(container = container.tag_name(), "installed export trigger");
        true
    }

    /// Installs the button and keeps it installed across re-renders.
    pub fn attach(self: &Rc<Self>, session: &LiveSession) {
        self.install(session);
        let trigger = Rc::clone(self);
        session.observe(move |session| {
            trigger.install(session);
        });
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Exports the current tree, stamped with the current local time.
    pub fn activate<S: DownloadSink + ?Sized>(&self, session: &LiveSession, sink: &S) -> Result<String, Notice> {
        self.activate_at(session, sink, Local::now().naive_local())
    }

    /// Exports the current tree and offers `<title>.md` to `sink`.
    ///
    /// Returns the offered file name.
    pub fn activate_at<S: DownloadSink + ?Sized>(
        &self,
        session: &LiveSession,
        sink: &S,
        exported_at: NaiveDateTime,
    ) -> Result<String, Notice> {
        match self.export(session, sink, exported_at) {
            Ok(filename) => {
                info!(filename = %filename, "markdown export offered");
                Ok(filename)
            }
            Err(err) => {
                error!(error = %err, url = session.url(), "markdown export failed");
                Err(Notice::from(&err))
            }
        }
    }

    fn export<S: DownloadSink + ?Sized>(
        &self,
        session: &LiveSession,
        sink: &S,
        exported_at: NaiveDateTime,
    ) -> Result<String, TriggerError> {
        if self.in_flight.replace(true) {
            return Err(TriggerError::InFlight);
        }
        self.set_busy(session, true);
        let _idle = scopeguard::guard((), |_| {
            self.set_busy(session, false);
            self.in_flight.set(false);
        });

        let conversation = self
            .assembler
            .export_document(session, session.url(), None, exported_at);
        let markdown = serialize(&conversation);
        let filename = markdown_filename(conversation.title());
        sink.offer(&filename, &markdown)?;
        Ok(filename)
    }

    fn set_busy(&self, session: &LiveSession, busy: bool) {
        if let Some(button) = session.root().get_element_by_id(TRIGGER_ID) {
            if busy {
                button.set_attr("disabled", "");
                button.set_text(BUSY_LABEL);
            } else {
                button.remove_attr("disabled");
                button.set_text(IDLE_LABEL);
            }
        }
    }
}
