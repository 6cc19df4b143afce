//! Dialog nodes, the vertices of the conversation graph.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::option::{DialogLink, DialogOption};
use crate::requirement::Requirement;
use crate::text::LocalizedText;

/// Identifier of a dialog node, unique within its collection.
///
/// Ids are assigned by the authoring side (see
/// [`DialogLibrary::next_free_id`](crate::DialogLibrary::next_free_id)) and
/// are stable for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogId(pub i32);

impl From<i32> for DialogId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a node's requirement list combines into availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementMode {
    /// Available iff every requirement holds.
    #[default]
    And,
    /// Available iff at least one requirement holds.
    Or,
}

/// A vertex of the dialog graph: something an NPC says, plus the options
/// the player can answer with.
///
/// An empty requirement list means the node is always available, in either
/// mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNode {
    /// Unique id within the owning collection.
    pub id: DialogId,
    /// Topic title, shown in topic lists.
    pub title: LocalizedText,
    /// Body text variants; one is picked at random per resolution for
    /// variety. Authoring should provide at least one.
    #[serde(default)]
    pub texts: Vec<LocalizedText>,
    /// User-defined metadata tag, passed through to conversations.
    #[serde(default)]
    pub tag: String,
    /// How `requirements` combine.
    #[serde(default)]
    pub requirement_mode: RequirementMode,
    /// Requirements gating this node's availability.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// The player-selectable answers leading out of this node.
    #[serde(default)]
    pub options: Vec<DialogOption>,
}

impl DialogNode {
    /// Create a node with the given id and title and no text, options, or
    /// requirements.
    pub fn new(id: impl Into<DialogId>, title: LocalizedText) -> Self {
        Self {
            id: id.into(),
            title,
            texts: Vec::new(),
            tag: String::new(),
            requirement_mode: RequirementMode::default(),
            requirements: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Add a body text variant.
    pub fn with_text(mut self, text: LocalizedText) -> Self {
        self.texts.push(text);
        self
    }

    /// Set the metadata tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the requirement combination mode.
    pub fn with_mode(mut self, mode: RequirementMode) -> Self {
        self.requirement_mode = mode;
        self
    }

    /// Add a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Add an option.
    pub fn with_option(mut self, option: DialogOption) -> Self {
        self.options.push(option);
        self
    }

    /// Pick a body text variant uniformly at random, covering the whole
    /// list. Returns `None` only for a (malformed) node with no texts.
    pub fn pick_text(&self, rng: &mut StdRng) -> Option<&LocalizedText> {
        if self.texts.is_empty() {
            return None;
        }
        Some(&self.texts[rng.random_range(0..self.texts.len())])
    }

    /// Visit this node and every node of its owned subtree, in option
    /// order.
    ///
    /// Redirection edges are back-references into chains owned elsewhere
    /// and are not followed, so traversal terminates on any well-formed
    /// graph, cycles included.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DialogNode)) {
        visit(self);
        for option in &self.options {
            if let Some(DialogLink::Node(next)) = &option.next {
                next.walk(visit);
            }
        }
    }

    /// Depth-first search for a node by id within this node's owned
    /// subtree. Redirection edges are not followed.
    pub fn find(&self, id: DialogId) -> Option<&DialogNode> {
        if self.id == id {
            return Some(self);
        }
        for option in &self.options {
            if let Some(DialogLink::Node(next)) = &option.next
                && let Some(found) = next.find(id)
            {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn text(value: &str) -> LocalizedText {
        LocalizedText::new(value).with(crate::Language::En, value)
    }

    fn leaf(id: i32) -> DialogNode {
        DialogNode::new(id, text("leaf")).with_text(text("..."))
    }

    #[test]
    fn builder_chain() {
        let node = DialogNode::new(5, text("Rumors"))
            .with_text(text("Strange lights in the hills."))
            .with_tag("gossip")
            .with_mode(RequirementMode::Or)
            .with_requirement(Requirement::PlayerIntValue { value: 1 })
            .with_option(DialogOption::new(text("Bye")));

        assert_eq!(node.id, DialogId(5));
        assert_eq!(node.tag, "gossip");
        assert_eq!(node.requirement_mode, RequirementMode::Or);
        assert_eq!(node.requirements.len(), 1);
        assert_eq!(node.options.len(), 1);
    }

    #[test]
    fn pick_text_covers_every_variant() {
        let node = DialogNode::new(1, text("t"))
            .with_text(text("first"))
            .with_text(text("second"));

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let picked = node.pick_text(&mut rng).unwrap();
            seen.insert(picked.description.clone());
        }
        assert!(seen.contains("first"));
        assert!(seen.contains("second"));
    }

    #[test]
    fn pick_text_empty_is_none() {
        let node = DialogNode::new(1, text("t"));
        let mut rng = StdRng::seed_from_u64(7);
        assert!(node.pick_text(&mut rng).is_none());
    }

    #[test]
    fn walk_visits_owned_subtree_in_order() {
        let node = DialogNode::new(1, text("root"))
            .with_option(DialogOption::new(text("a")).with_next(leaf(2)))
            .with_option(DialogOption::new(text("b")).with_next(leaf(3)));

        let mut visited = Vec::new();
        node.walk(&mut |n| visited.push(n.id.0));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn walk_stops_at_redirection_edges() {
        // 1 -> 2, and 2 redirects back to 1: a cycle through a back edge.
        let inner = DialogNode::new(2, text("inner"))
            .with_option(DialogOption::new(text("again")).with_redirect(1));
        let node = DialogNode::new(1, text("root"))
            .with_option(DialogOption::new(text("go")).with_next(inner));

        let mut visited = Vec::new();
        node.walk(&mut |n| visited.push(n.id.0));
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn find_searches_owned_edges_only() {
        let inner = DialogNode::new(2, text("inner"))
            .with_option(DialogOption::new(text("again")).with_redirect(99));
        let node = DialogNode::new(1, text("root"))
            .with_option(DialogOption::new(text("go")).with_next(inner));

        assert_eq!(node.find(DialogId(2)).unwrap().id, DialogId(2));
        assert!(node.find(DialogId(99)).is_none());
    }
}
