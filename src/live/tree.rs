//! Mutable in-memory element tree.
//!
//! Elements are shared handles (`Rc`) with interior mutability, so a session
//! can keep re-rendering parts of the tree while other handles stay valid.
//! Parents are held weakly; dropping the root drops the whole tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::document::{Child, Document, HtmlDocument, Node, Pattern};

struct ElementData {
    tag: String,
    attrs: RefCell<Vec<(String, String)>>,
    children: RefCell<Vec<LiveChild>>,
    parent: RefCell<Weak<ElementData>>,
}

/// Releases descendants iteratively; the derived drop would recurse once
/// per nesting level.
impl Drop for ElementData {
    fn drop(&mut self) {
        let mut orphans: Vec<Rc<ElementData>> = element_children(self.children.get_mut());
        while let Some(data) = orphans.pop() {
            if let Ok(mut data) = Rc::try_unwrap(data) {
                orphans.extend(element_children(data.children.get_mut()));
            }
        }
    }
}

fn element_children(children: &mut Vec<LiveChild>) -> Vec<Rc<ElementData>> {
    children
        .drain(..)
        .filter_map(|child| match child {
            LiveChild::Element(element) => Some(element.0),
            LiveChild::Text(_) => None,
        })
        .collect()
}

#[derive(Clone)]
enum LiveChild {
    Element(Element),
    Text(String),
}

/// Handle to a live element. Clones share the same element.
#[derive(Clone)]
pub struct Element(Rc<ElementData>);

impl Element {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            attrs: RefCell::new(Vec::new()),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
        }))
    }

    /// Builds a live copy of any other tree's subtree.
    pub fn from_node<N: Node>(node: &N) -> Self {
        let root = Self::shallow_copy(node);
        let mut pending = vec![(node.clone(), root.clone())];
        while let Some((source, target)) = pending.pop() {
            for child in source.children() {
                match child {
                    Child::Element(child) => {
                        let copy = Self::shallow_copy(&child);
                        target.append_child(&copy);
                        pending.push((child, copy));
                    }
                    Child::Text(text) => target.append_text(&text),
                }
            }
        }
        root
    }

    fn shallow_copy<N: Node>(node: &N) -> Self {
        let element = Self::new(node.tag_name());
        for (name, value) in node.attributes() {
            element.set_attr(&name, &value);
        }
        element
    }

    /// Parses `html` into a live tree rooted at `<html>`.
    pub fn from_html(html: &str) -> Self {
        Self::from_node(&HtmlDocument::parse(html).root())
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.append_text(text);
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append_child(&child);
        self
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        let mut attrs = self.0.attrs.borrow_mut();
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&self, name: &str) {
        self.0.attrs.borrow_mut().retain(|(n, _)| n != name);
    }

    /// Appends `child`, detaching it from its previous parent first.
    pub fn append_child(&self, child: &Element) {
        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0
            .children
            .borrow_mut()
            .push(LiveChild::Element(child.clone()));
    }

    pub fn append_text(&self, text: &str) {
        self.0
            .children
            .borrow_mut()
            .push(LiveChild::Text(text.to_string()));
    }

    /// Replaces all children with a single text run.
    pub fn set_text(&self, text: &str) {
        self.clear_children();
        self.append_text(text);
    }

    pub fn clear_children(&self) {
        let removed = std::mem::take(&mut *self.0.children.borrow_mut());
        for child in removed {
            if let LiveChild::Element(element) = child {
                *element.0.parent.borrow_mut() = Weak::new();
            }
        }
    }

    /// Removes this element from its parent. No-op for detached elements.
    pub fn detach(&self) {
        let parent = self.0.parent.borrow().upgrade();
        if let Some(parent) = parent {
            parent.children.borrow_mut().retain(|child| match child {
                LiveChild::Element(e) => !Rc::ptr_eq(&e.0, &self.0),
                LiveChild::Text(_) => true,
            });
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    /// First element in this subtree (self included) with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        std::iter::once(self.clone())
            .chain(self.descendants())
            .find(|e| e.attr("id").as_deref() == Some(id))
    }

    /// First element in this subtree (self included) matching `pattern`.
    pub fn query(&self, pattern: &Pattern) -> Option<Element> {
        if pattern.matches(self) {
            return Some(self.clone());
        }
        self.find_first(pattern)
    }

    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.0.tag)
            .field("attrs", &*self.0.attrs.borrow())
            .field("children", &self.0.children.borrow().len())
            .finish()
    }
}

impl Node for Element {
    fn tag_name(&self) -> &str {
        &self.0.tag
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0
            .attrs
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.0.attrs.borrow().clone()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(Element)
    }

    fn children(&self) -> Vec<Child<Self>> {
        self.0
            .children
            .borrow()
            .iter()
            .map(|child| match child {
                LiveChild::Element(e) => Child::Element(e.clone()),
                LiveChild::Text(t) => Child::Text(t.clone()),
            })
            .collect()
    }
}
