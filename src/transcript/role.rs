//! Speaker role classification.
//!
//! Roles come from an ordered list of [`RoleRule`]s evaluated against the
//! [`RoleSignals`] read off a node. The first rule that matches decides; if
//! none does, the message is attributed to the assistant.
//!
//! Rule order:
//!
//! 1. Author-role marker containing `user`, `assistant`, `system`
//! 2. Class names looking like an assistant (`assistant`, `bot`)
//! 3. Class names looking like the user (`user`, `me`, `author-user`)
//! 4. Text starting with `You` (weak, older layouts without markers)
//! 5. Default: assistant

use super::selector::AUTHOR_ROLE_ATTR;
use super::types::Role;
use crate::document::Node;

/// Role assigned when no rule matches.
pub const DEFAULT_ROLE: Role = Role::Assistant;

/// The parts of a node that role rules may look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSignals {
    /// Value of `data-message-author-role`, if present.
    pub marker: Option<String>,
    /// Raw `class` attribute, if present.
    pub class: Option<String>,
    /// Raw text content, untrimmed.
    pub text: String,
}

impl RoleSignals {
    pub fn from_node<N: Node>(node: &N) -> Self {
        Self {
            marker: node.attr(AUTHOR_ROLE_ATTR),
            class: node.attr("class"),
            text: node.text_content(),
        }
    }

    fn marker_contains(&self, needle: &str) -> bool {
        self.marker.as_deref().is_some_and(|m| m.contains(needle))
    }

    fn class_contains_any(&self, needles: &[&str]) -> bool {
        self.class.as_deref().is_some_and(|class| {
            let lower = class.to_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
    }
}

/// A named, pure predicate paired with the role it assigns.
#[derive(Clone, Copy)]
pub struct RoleRule {
    pub name: &'static str,
    pub role: Role,
    predicate: fn(&RoleSignals) -> bool,
}

impl RoleRule {
    pub const fn new(name: &'static str, role: Role, predicate: fn(&RoleSignals) -> bool) -> Self {
        Self {
            name,
            role,
            predicate,
        }
    }

    pub fn applies(&self, signals: &RoleSignals) -> bool {
        (self.predicate)(signals)
    }
}

impl std::fmt::Debug for RoleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRule")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

const MARKER_USER: RoleRule = RoleRule::new("marker-user", Role::User, |s| s.marker_contains("user"));
const MARKER_ASSISTANT: RoleRule =
    RoleRule::new("marker-assistant", Role::Assistant, |s| s.marker_contains("assistant"));
const MARKER_SYSTEM: RoleRule =
    RoleRule::new("marker-system", Role::System, |s| s.marker_contains("system"));
const CLASS_ASSISTANT: RoleRule = RoleRule::new("class-assistant", Role::Assistant, |s| {
    s.class_contains_any(&["assistant", "bot"])
});
const CLASS_USER: RoleRule = RoleRule::new("class-user", Role::User, |s| {
    s.class_contains_any(&["user", "me", "author-user"])
});
const TEXT_PREFIX_YOU: RoleRule =
    RoleRule::new("text-prefix-you", Role::User, |s| s.text.starts_with("You"));

/// Classifies nodes by running the rule chain.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    rules: Vec<RoleRule>,
}

impl RoleClassifier {
    /// The full chain, including the `You` text heuristic.
    pub fn new() -> Self {
        Self::with_text_heuristic(true)
    }

    /// The chain with or without the trailing `You` text heuristic.
    pub fn with_text_heuristic(enabled: bool) -> Self {
        let mut rules = vec![
            MARKER_USER,
            MARKER_ASSISTANT,
            MARKER_SYSTEM,
            CLASS_ASSISTANT,
            CLASS_USER,
        ];
        if enabled {
            rules.push(TEXT_PREFIX_YOU);
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    pub fn classify<N: Node>(&self, node: &N) -> Role {
        self.classify_signals(&RoleSignals::from_node(node))
    }

    pub fn classify_signals(&self, signals: &RoleSignals) -> Role {
        self.rules
            .iter()
            .find(|rule| rule.applies(signals))
            .map(|rule| rule.role)
            .unwrap_or(DEFAULT_ROLE)
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new()
    }
}
