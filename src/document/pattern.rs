//! Structural patterns for locating nodes.
//!
//! A [`Pattern`] is a small, provider-independent subset of CSS selectors:
//! enough to express the message, heading and content queries the pipeline
//! needs, evaluated directly against any [`Node`].

use std::fmt;

use super::Node;

/// A structural query over elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `tag`
    Tag(&'static str),
    /// `tag[attr]` or `[attr]`
    HasAttr {
        tag: Option<&'static str>,
        attr: &'static str,
    },
    /// `[attr="value"]`
    AttrEquals {
        attr: &'static str,
        value: &'static str,
    },
    /// `.class`
    Class(&'static str),
    /// `ancestor target`
    Within {
        ancestor: Box<Pattern>,
        target: Box<Pattern>,
    },
    /// `a, b, c`
    AnyOf(Vec<Pattern>),
}

impl Pattern {
    pub fn tag(tag: &'static str) -> Self {
        Self::Tag(tag)
    }

    pub fn has_attr(tag: Option<&'static str>, attr: &'static str) -> Self {
        Self::HasAttr { tag, attr }
    }

    pub fn attr_eq(attr: &'static str, value: &'static str) -> Self {
        Self::AttrEquals { attr, value }
    }

    pub fn class(class: &'static str) -> Self {
        Self::Class(class)
    }

    pub fn within(ancestor: Pattern, target: Pattern) -> Self {
        Self::Within {
            ancestor: Box::new(ancestor),
            target: Box::new(target),
        }
    }

    pub fn any(patterns: Vec<Pattern>) -> Self {
        Self::AnyOf(patterns)
    }

    /// Whether `node` itself satisfies this pattern.
    pub fn matches<N: Node>(&self, node: &N) -> bool {
        match self {
            Self::Tag(tag) => node.tag_name().eq_ignore_ascii_case(tag),
            Self::HasAttr { tag, attr } => {
                tag.map_or(true, |t| node.tag_name().eq_ignore_ascii_case(t))
                    && node.attr(attr).is_some()
            }
            Self::AttrEquals { attr, value } => node.attr(attr).as_deref() == Some(*value),
            Self::Class(class) => node.has_class(class),
            Self::Within { ancestor, target } => {
                if !target.matches(node) {
                    return false;
                }
                let mut current = node.parent();
                while let Some(parent) = current {
                    if ancestor.matches(&parent) {
                        return true;
                    }
                    current = parent.parent();
                }
                false
            }
            Self::AnyOf(patterns) => patterns.iter().any(|p| p.matches(node)),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{}", tag),
            Self::HasAttr { tag, attr } => write!(f, "{}[{}]", tag.unwrap_or(""), attr),
            Self::AttrEquals { attr, value } => write!(f, "[{}=\"{}\"]", attr, value),
            Self::Class(class) => write!(f, ".{}", class),
            Self::Within { ancestor, target } => write!(f, "{} {}", ancestor, target),
            Self::AnyOf(patterns) => {
                for (i, pattern) in patterns.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", pattern)?;
                }
                Ok(())
            }
        }
    }
}
