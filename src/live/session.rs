//! A live session: a mutable document with mutation observers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::tree::Element;
use crate::document::{collapse_whitespace, heading_pattern, Document, Node, Pattern};

/// Callback run after every mutation made through [`LiveSession::mutate`].
pub type MutationObserver = Rc<dyn Fn(&LiveSession)>;

/// The in-memory tree of an interactive session.
pub struct LiveSession {
    url: String,
    root: Element,
    observers: RefCell<Vec<MutationObserver>>,
}

impl LiveSession {
    pub fn new(url: impl Into<String>, root: Element) -> Self {
        Self {
            url: url.into(),
            root,
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Starts a session from a full HTML page.
    pub fn from_html(url: impl Into<String>, html: &str) -> Self {
        Self::new(url, Element::from_html(html))
    }

    /// Address of the page; used as the transcript source.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<Element> {
        self.root.query(&Pattern::tag("body"))
    }

    /// Registers an observer notified after each mutation.
    pub fn observe(&self, observer: impl Fn(&LiveSession) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Applies `change` to the tree, then notifies every observer.
    pub fn mutate<R>(&self, change: impl FnOnce(&Element) -> R) -> R {
        let result = change(&self.root);
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(self);
        }
        result
    }
}

impl fmt::Debug for LiveSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveSession")
            .field("url", &self.url)
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl Document for LiveSession {
    type Node<'a> = Element;

    fn root(&self) -> Element {
        self.root.clone()
    }

    /// The visible heading first, then the `<title>` element.
    fn title(&self) -> Option<String> {
        let heading = self
            .root
            .query(&heading_pattern())
            .map(|h| collapse_whitespace(&h.text_content()))
            .filter(|t| !t.is_empty());
        heading.or_else(|| {
            self.root
                .query(&Pattern::tag("title"))
                .map(|t| collapse_whitespace(&t.text_content()))
                .filter(|t| !t.is_empty())
        })
    }
}
